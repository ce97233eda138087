use crate::{
    ast::BinaryOperator,
    runtime::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Resolves a binary operation between two already-evaluated operands.
    ///
    /// Resolution runs through three hard branches, in order, because lists,
    /// booleans and numbers each support incompatible operator subsets:
    ///
    /// 1. Both operands are list-typed: dispatch to the list-operator table.
    /// 2. Exactly one operand is list-typed: no defined semantics, the
    ///    operation produces no value.
    /// 3. Neither is list-typed: `&&`/`||` expect booleans, `==`/`!=`
    ///    compare by value equality (differing kinds compare unequal), and
    ///    every remaining operator coerces both operands to floating-point
    ///    numbers. A failed coercion is a hard failure, never a silently
    ///    wrong result.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value, or `None` for operand combinations with no
    /// defined semantics.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     runtime::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add,
    ///                                   &Value::Number(3.0),
    ///                                   &Value::Number(4.0),
    ///                                   1);
    /// assert_eq!(result.unwrap(), Some(Value::Number(7.0)));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Option<Value>> {
        use BinaryOperator::{And, Equal, NotEqual, Or};

        match (left.as_list(), right.as_list()) {
            (Some(lhs), Some(rhs)) => Ok(Self::eval_list_op(op, lhs, rhs)),
            (Some(_), None) | (None, Some(_)) => Ok(None),
            (None, None) => match op {
                And | Or => Self::eval_logic(op, left, right, line).map(Some),
                Equal => Ok(Some(Value::Bool(left == right))),
                NotEqual => Ok(Some(Value::Bool(left != right))),
                _ => Self::eval_numeric_op(op, left, right, line),
            },
        }
    }
}
