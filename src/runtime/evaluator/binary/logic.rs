use crate::{
    ast::BinaryOperator,
    runtime::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// The operands are converted to booleans using `as_bool`; anything else
    /// is a hard failure. Note that both operands were already evaluated by
    /// the time this runs, so `&&` and `||` never skip side effects.
    ///
    /// # Parameters
    /// - `op`: The logical operator (`And` or `Or`).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     runtime::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or,
    ///                                  &Value::Bool(false),
    ///                                  &Value::Bool(true),
    ///                                  1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        use BinaryOperator::{And, Or};

        match op {
            And => Ok(Value::Bool(left.as_bool(line)? && right.as_bool(line)?)),
            Or => Ok(Value::Bool(left.as_bool(line)? || right.as_bool(line)?)),
            _ => unreachable!("eval_logic used with non logical operator"),
        }
    }
}
