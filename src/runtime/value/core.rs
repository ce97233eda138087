use std::rc::Rc;

use crate::{
    error::RuntimeError,
    runtime::{evaluator::core::EvalResult, value::list::ListValue},
};

/// Represents a runtime value produced by expression evaluation.
///
/// This enum models every type that can flow through a condition: booleans,
/// numbers, strings, and multi-valued lists. "No value" is not a variant;
/// the evaluator carries it as the `None` of an `Option<Value>` so that every
/// `Value` in hand is something concrete.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators, containment checks and logical
    /// operations, and by the reserved `True`/`False` names.
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    Str(String),
    /// A multi-valued list of named flags.
    List(Rc<ListValue>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<ListValue> for Value {
    fn from(v: ListValue) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// The kind of the value, for error reporting.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::List(_) => "list",
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used by the logical operators and boolean negation, which have no
    /// defined semantics for any other kind.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    ///
    /// # Example
    /// ```
    /// use quill::runtime::value::core::Value;
    ///
    /// assert!(Value::Bool(true).as_bool(1).unwrap());
    /// assert!(Value::Number(1.0).as_bool(1).is_err());
    /// ```
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.kind(),
                                                     line }),
        }
    }

    /// Coerces the value to an `f64` for the numeric operator table.
    ///
    /// Numbers convert directly, booleans become `0.0` or `1.0`, and strings
    /// holding a numeral parse. Anything else (a list, a non-numeric string)
    /// is a hard failure rather than a silently wrong result.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The coerced value.
    /// - `Err(RuntimeError::ExpectedNumber)`: If the value has no numeric
    ///   reading.
    ///
    /// # Example
    /// ```
    /// use quill::runtime::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(1).unwrap(), 2.5);
    /// assert_eq!(Value::Bool(true).as_number(1).unwrap(), 1.0);
    /// assert_eq!(Value::Str("7".to_string()).as_number(1).unwrap(), 7.0);
    /// assert!(Value::Str("brisk".to_string()).as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Self::Str(s) => {
                s.trim()
                 .parse()
                 .map_err(|_| RuntimeError::ExpectedNumber { found: self.kind(),
                                                             line })
            },
            Self::List(_) => Err(RuntimeError::ExpectedNumber { found: self.kind(),
                                                                line }),
        }
    }

    /// Views the value as a list, if it is one.
    ///
    /// This is the list adapter of the operator resolver: `None` means "not
    /// list-typed", never an error.
    #[must_use]
    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Self::List(list) => Some(list.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`List`](Self::List).
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(list) => write!(f, "{list}"),
        }
    }
}
