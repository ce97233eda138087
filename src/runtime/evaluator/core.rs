use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    runtime::{
        state::{FunctionTable, VariableStore},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Policy applied when a variable reference resolves through neither lookup
/// path.
///
/// Narrative scripts routinely test state that does not exist yet, so the
/// default is the tolerant behavior; hosts that prefer to catch typos can
/// opt into the strict one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedVariablePolicy {
    /// The reference evaluates to no value, which callers treat as "absent /
    /// evaluates false" in boolean contexts.
    #[default]
    Null,
    /// The reference aborts evaluation with
    /// [`RuntimeError::UnknownVariable`].
    Error,
}

/// The read-only story state an expression is resolved against.
///
/// A `Context` borrows the host's variable store and function table for the
/// duration of one or more evaluations; it holds no state of its own across
/// calls. Evaluating the same expression against an unchanged context yields
/// the same result (externally bound functions permitting).
///
/// ## Usage
///
/// Build a `Context` around the story state, then call
/// [`eval`](Context::eval) with each condition to test. The free function
/// [`evaluate`](crate::evaluate) wraps both steps for one-shot use.
pub struct Context<'a> {
    /// Variable bindings of the executing story.
    pub variables:  &'a dyn VariableStore,
    /// Story-defined and externally bound functions.
    pub functions:  &'a dyn FunctionTable,
    /// How an unresolved variable reference is treated.
    pub unresolved: UnresolvedVariablePolicy,
}

impl<'a> Context<'a> {
    /// Creates a context over the given story state with the default
    /// tolerant [`UnresolvedVariablePolicy`].
    #[must_use]
    pub fn new(variables: &'a dyn VariableStore, functions: &'a dyn FunctionTable) -> Self {
        Self { variables,
               functions,
               unresolved: UnresolvedVariablePolicy::default() }
    }

    /// Replaces the unresolved-variable policy.
    #[must_use]
    pub const fn with_unresolved_policy(mut self, policy: UnresolvedVariablePolicy) -> Self {
        self.unresolved = policy;
        self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variable references,
    /// function calls, binary and unary operations, and list literals.
    ///
    /// `Ok(None)` means the expression produced no value: an unresolved
    /// variable under the tolerant policy, an operator applied to mixed list
    /// and scalar operands, or a malformed list literal. Callers treat it as
    /// "absent / evaluates false". A `RuntimeError` anywhere in the tree
    /// aborts the whole evaluation.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for the
    /// tolerated no-value outcomes.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::Expr,
    ///     runtime::{
    ///         evaluator::core::Context,
    ///         state::{FunctionRegistry, MemoryStore},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut store = MemoryStore::new();
    /// store.set("lantern_lit", true);
    /// let functions = FunctionRegistry::new();
    ///
    /// let context = Context::new(&store, &functions);
    /// let expr = Expr::Variable { name: "lantern_lit".to_string(),
    ///                             line: 1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Some(Value::Bool(true)));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Number { value, .. } => Ok(Some(Value::Number(*value))),
            Expr::Str { value, .. } => Ok(Some(Value::Str(value.clone()))),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::ListLiteral { group, line } => self.eval_list_literal(group, *line),
        }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operands of binary and unary operations and function arguments all
    /// require a concrete value; an absent one is a `MissingValue` failure
    /// that aborts the evaluation.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The evaluated `Value`.
    pub fn eval_child(&self, expr: &Expr) -> EvalResult<Value> {
        self.eval(expr)?
            .ok_or(RuntimeError::MissingValue { line: expr.line_number() })
    }

    /// Resolves a variable reference.
    ///
    /// The reserved names `True` and `False` return booleans without
    /// consulting the store. Every other name tries the store's primary
    /// lookup, then the fallback that also resolves list item names. An
    /// unresolved name follows the context's [`UnresolvedVariablePolicy`].
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The variable's value, or `None` when unresolved under the tolerant
    /// policy.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Option<Value>> {
        if name == "True" {
            return Ok(Some(Value::Bool(true)));
        }
        if name == "False" {
            return Ok(Some(Value::Bool(false)));
        }

        if let Some(value) = self.lookup(name) {
            return Ok(Some(value));
        }

        match self.unresolved {
            UnresolvedVariablePolicy::Null => Ok(None),
            UnresolvedVariablePolicy::Error => {
                Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                    line })
            },
        }
    }

    /// Resolves a list literal: a parenthesized, comma-separated group of
    /// list or item names.
    ///
    /// The first name anchors the result; every further name must also
    /// resolve to a list and is folded in by union. A group that is not
    /// parenthesized, holds no names, or whose first name is not
    /// list-bearing produces no value. A later name that fails to resolve
    /// to a list is a hard failure, since the union built so far would be
    /// incomplete.
    ///
    /// # Parameters
    /// - `group`: The raw parenthesized text, e.g. `"(hot, humid)"`.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The combined list, or `None` for a malformed group.
    pub fn eval_list_literal(&self, group: &str, line: usize) -> EvalResult<Option<Value>> {
        let Some(inner) = group.trim()
                               .strip_prefix('(')
                               .and_then(|rest| rest.strip_suffix(')'))
        else {
            return Ok(None);
        };

        let names: Vec<&str> = inner.split(',')
                                    .map(str::trim)
                                    .filter(|name| !name.is_empty())
                                    .collect();
        let Some((first, rest)) = names.split_first() else {
            return Ok(None);
        };

        let Some(anchor) = self.lookup(first) else {
            return Ok(None);
        };
        let Some(anchor) = anchor.as_list() else {
            return Ok(None);
        };

        let mut combined = anchor.clone();
        for name in rest {
            let value =
                self.lookup(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: (*name).to_string(),
                                                                   line })?;
            let other = value.as_list()
                             .ok_or(RuntimeError::ExpectedList { found: value.kind(),
                                                                 line })?;
            combined = combined.union(other);
        }

        Ok(Some(Value::List(Rc::new(combined))))
    }

    /// Evaluates a binary operator applied to two expressions.
    ///
    /// Both operands are evaluated unconditionally, left first. There is no
    /// short-circuiting, even for `&&` and `||`: a side-effecting function
    /// call on either side must run. The evaluated values are then passed to
    /// the operator resolver.
    fn eval_binary_op(&self,
                      left: &Expr,
                      op: BinaryOperator,
                      right: &Expr,
                      line: usize)
                      -> EvalResult<Option<Value>> {
        let lhs = self.eval_child(left)?;
        let rhs = self.eval_child(right)?;

        Self::eval_binary(op, &lhs, &rhs, line)
    }

    /// Evaluates a unary operator applied to a subexpression.
    fn eval_unary_op(&self,
                     op: UnaryOperator,
                     expr: &Expr,
                     line: usize)
                     -> EvalResult<Option<Value>> {
        let value = self.eval_child(expr)?;
        Ok(Some(Self::eval_unary(op, &value, line)?))
    }

    /// Looks a name up in the variable store: primary lookup first, then the
    /// list-item fallback.
    pub(crate) fn lookup(&self, name: &str) -> Option<Value> {
        self.variables
            .value_of(name)
            .or_else(|| self.variables.list_item(name))
    }
}
