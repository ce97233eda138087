use crate::{
    error::RuntimeError,
    runtime::{
        evaluator::{core::EvalResult, function::core::check_arity},
        value::{core::Value, list::ListValue},
    },
};

/// Coerces the single argument of a list native to a list.
fn require_list<'a>(name: &str, args: &'a [Value], line: usize) -> EvalResult<&'a ListValue> {
    check_arity(name, args, 1, line)?;

    args[0].as_list()
           .ok_or(RuntimeError::ExpectedList { found: args[0].kind(),
                                               line })
}

/// Returns the list's smallest item as a singleton list, or an empty list.
///
/// # Example
/// ```
/// use quill::runtime::{
///     evaluator::function::native::list_min,
///     value::{
///         core::Value,
///         list::{ListItem, ListValue},
///     },
/// };
///
/// let mut marks = ListValue::new();
/// marks.insert(ListItem::new("marks", "first"), 1);
/// marks.insert(ListItem::new("marks", "second"), 2);
///
/// let result = list_min(&[Value::from(marks)], 1).unwrap();
/// assert_eq!(result.to_string(), "first");
/// ```
pub fn list_min(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(require_list("LIST_MIN", args, line)?.min_as_list().into())
}

/// Returns the list's largest item as a singleton list, or an empty list.
pub fn list_max(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(require_list("LIST_MAX", args, line)?.max_as_list().into())
}

/// Returns every item the list's origin definitions declare.
pub fn list_all(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(require_list("LIST_ALL", args, line)?.all().into())
}

/// Returns the number of items in the list.
///
/// Cardinality is bounded by the story's list definitions, so the count is
/// always exactly representable.
#[allow(clippy::cast_precision_loss)]
pub fn list_count(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(Value::Number(require_list("LIST_COUNT", args, line)?.len() as f64))
}

/// Returns the ordinal of the list's largest item, or `0` for an empty
/// list.
pub fn list_value(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(Value::Number(f64::from(require_list("LIST_VALUE", args, line)?.max_ordinal())))
}

/// Returns the complement of the list within its origin definitions.
pub fn list_invert(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(require_list("LIST_INVERT", args, line)?.inverse().into())
}
