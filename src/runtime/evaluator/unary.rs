use crate::{
    ast::UnaryOperator,
    runtime::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// `Not` negates a boolean; a non-boolean operand is a hard failure.
    /// `Identity` covers any other tag the parser may emit and returns the
    /// operand unchanged.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::UnaryOperator,
    ///     runtime::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Identity, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(5.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(line)?)),
            UnaryOperator::Identity => Ok(value.clone()),
        }
    }
}
