use crate::{
    ast::Expr,
    error::RuntimeError,
    runtime::{
        evaluator::{
            core::{Context, EvalResult},
            function::native,
        },
        value::core::Value,
    },
};

/// Type alias for native function handlers.
///
/// A native receives a slice of evaluated argument values and the line
/// number. It returns a value wrapped in `EvalResult`.
type NativeFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines the native functions by generating a lookup table and a name
/// list.
///
/// Each entry provides:
/// - the function's script name,
/// - the number of arguments it takes,
/// - a function pointer implementing it.
///
/// The macro produces:
/// - `NativeDef` (internal metadata),
/// - `NATIVE_TABLE` (static table for lookup),
/// - `NATIVE_FUNCTIONS` (public list of native names).
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                arity: $arity:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct NativeDef {
            name:  &'static str,
            arity: usize,
            func:  NativeFn,
        }
        static NATIVE_TABLE: &[NativeDef] = &[
            $(
                NativeDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the fixed list-native functions.
        pub const NATIVE_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    "LIST_MIN"    => { arity: 1, func: native::list_min },
    "LIST_MAX"    => { arity: 1, func: native::list_max },
    "LIST_ALL"    => { arity: 1, func: native::list_all },
    "LIST_COUNT"  => { arity: 1, func: native::list_count },
    "LIST_VALUE"  => { arity: 1, func: native::list_value },
    "LIST_INVERT" => { arity: 1, func: native::list_invert },
}

/// Returns `true` when `name` is one of the fixed list-native functions,
/// which dispatch directly without consulting the story-defined or external
/// tables.
///
/// ## Example
/// ```
/// use quill::runtime::evaluator::function::core::is_native;
///
/// assert!(is_native("LIST_COUNT"));
/// assert!(!is_native("visited"));
/// ```
#[must_use]
pub fn is_native(name: &str) -> bool {
    NATIVE_FUNCTIONS.contains(&name)
}

/// Checks if the argument list matches the expected count.
/// Returns an error if the argument count does not match.
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected,
                                                  found: args.len(),
                                                  line })
    }
}

impl Context<'_> {
    /// Evaluates a function call expression.
    ///
    /// Argument expressions are evaluated left to right, and each must
    /// produce a value; order matters when arguments have side effects
    /// through externally bound functions. The call is then dispatched by
    /// name.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Expression arguments.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function's result, which may be no value for void callbacks.
    pub fn eval_function_call(&self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Option<Value>> {
        let mut args = Vec::with_capacity(arguments.len());

        for expr in arguments {
            args.push(self.eval_child(expr)?);
        }

        self.eval_function(name, &args, line)
    }

    /// Dispatches a function call over already-evaluated arguments.
    ///
    /// Resolution checks, in strict order:
    /// 1. the fixed list-native table, bypassing both story-defined and
    ///    external names;
    /// 2. functions defined in the script itself;
    /// 3. externally bound host functions.
    ///
    /// A name absent from all three is an `UnknownFunction` failure, which
    /// distinguishes a typo or missing binding from merely absent optional
    /// state.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result, or an error if lookup or arity fails.
    pub fn eval_function(&self,
                         name: &str,
                         args: &[Value],
                         line: usize)
                         -> EvalResult<Option<Value>> {
        if let Some(native) = NATIVE_TABLE.iter().find(|def| def.name == name) {
            check_arity(name, args, native.arity, line)?;
            return (native.func)(args, line).map(Some);
        }

        if self.functions.has_story_function(name) {
            return Ok(self.functions.call_story_function(name, args));
        }

        if self.functions.has_external_function(name) {
            return Ok(self.functions.call_external_function(name, args));
        }

        Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                            line })
    }
}
