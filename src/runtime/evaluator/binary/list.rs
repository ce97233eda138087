use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    runtime::{
        evaluator::core::Context,
        value::{core::Value, list::ListValue},
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two lists.
    ///
    /// Supported operators map to list algebra:
    /// - `+` produces the union, `-` the difference, `^` the intersection.
    /// - `==`/`!=` compare item sets.
    /// - `?`/`!?` test containment of the right operand's items.
    /// - The four orderings compare the lists' ordinal ranges.
    ///
    /// Any other operator has no list semantics and produces no value.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left-hand list.
    /// - `right`: Right-hand list.
    ///
    /// # Returns
    /// The resulting value, or `None` for operators without list semantics.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     runtime::{
    ///         evaluator::core::Context,
    ///         value::list::{ListItem, ListValue},
    ///     },
    /// };
    ///
    /// let mut held = ListValue::new();
    /// held.insert(ListItem::new("keys", "brass"), 1);
    /// held.insert(ListItem::new("keys", "iron"), 2);
    ///
    /// let mut wanted = ListValue::new();
    /// wanted.insert(ListItem::new("keys", "iron"), 2);
    ///
    /// let result = Context::eval_list_op(BinaryOperator::Has, &held, &wanted);
    /// assert_eq!(result, Some(quill::runtime::value::core::Value::Bool(true)));
    /// ```
    #[must_use]
    pub fn eval_list_op(op: BinaryOperator, left: &ListValue, right: &ListValue) -> Option<Value> {
        use BinaryOperator::{
            Add, Equal, Greater, GreaterEqual, Has, Hasnt, Intersect, Less, LessEqual, NotEqual,
            Sub,
        };

        match op {
            Add => Some(Value::List(Rc::new(left.union(right)))),
            Sub => Some(Value::List(Rc::new(left.without(right)))),
            Intersect => Some(Value::List(Rc::new(left.intersect(right)))),

            Equal => Some(Value::Bool(left == right)),
            NotEqual => Some(Value::Bool(left != right)),

            Greater => Some(Value::Bool(left.greater_than(right))),
            GreaterEqual => Some(Value::Bool(left.greater_than_or_equals(right))),
            Less => Some(Value::Bool(left.less_than(right))),
            LessEqual => Some(Value::Bool(left.less_than_or_equals(right))),

            Has => Some(Value::Bool(left.contains(right))),
            Hasnt => Some(Value::Bool(!left.contains(right))),

            _ => None,
        }
    }
}
