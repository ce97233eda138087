use crate::{
    ast::BinaryOperator,
    runtime::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic or ordering operation over numbers.
    ///
    /// Both operands are coerced with `as_number` before the operator is
    /// considered, so a non-coercible operand fails even under an operator
    /// that turns out to have no numeric semantics. Division and modulo
    /// follow ordinary IEEE 754 semantics: dividing by zero yields an
    /// infinity or NaN, not an error, and existing story content depends on
    /// that.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// A number for arithmetic, a boolean for orderings, or `None` for the
    /// operators with no numeric semantics (containment, intersection).
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     runtime::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_numeric_op(BinaryOperator::Div,
    ///                                       &Value::Number(1.0),
    ///                                       &Value::Number(0.0),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Some(Value::Number(f64::INFINITY)));
    /// ```
    pub fn eval_numeric_op(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Option<Value>> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Has, Hasnt, Intersect, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Sub,
        };

        let lhs = left.as_number(line)?;
        let rhs = right.as_number(line)?;

        Ok(match op {
               Add => Some(Value::Number(lhs + rhs)),
               Sub => Some(Value::Number(lhs - rhs)),
               Mul => Some(Value::Number(lhs * rhs)),
               Div => Some(Value::Number(lhs / rhs)),
               Mod => Some(Value::Number(lhs % rhs)),

               Greater => Some(Value::Bool(lhs > rhs)),
               GreaterEqual => Some(Value::Bool(lhs >= rhs)),
               Less => Some(Value::Bool(lhs < rhs)),
               LessEqual => Some(Value::Bool(lhs <= rhs)),

               Has | Hasnt | Intersect => None,

               And | Or | Equal | NotEqual => {
                   unreachable!("handled before numeric dispatch")
               },
           })
    }
}
