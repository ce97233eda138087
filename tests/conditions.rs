use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;
use quill::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    runtime::{
        evaluator::core::{Context, UnresolvedVariablePolicy},
        state::{FunctionRegistry, MemoryStore},
        value::{
            core::Value,
            list::{ListDefinition, ListItem, ListValue},
        },
    },
};

fn num(value: f64) -> Expr {
    Expr::Number { value, line: 1 }
}

fn text(value: &str) -> Expr {
    Expr::Str { value: value.to_string(),
                line:  1, }
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line: 1, }
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

fn unary(op: UnaryOperator, expr: Expr) -> Expr {
    Expr::UnaryOp { op,
                    expr: Box::new(expr),
                    line: 1 }
}

fn call(name: &str, arguments: Vec<Expr>) -> Expr {
    Expr::FunctionCall { name: name.to_string(),
                         arguments,
                         line: 1 }
}

fn group(text: &str) -> Expr {
    Expr::ListLiteral { group: text.to_string(),
                        line:  1, }
}

fn weather_item(name: &str) -> ListItem {
    ListItem::new("weather", name)
}

/// Story state shared by most scenarios: a counter, a name, a weather list
/// definition, and a `forecast` variable holding two of its items.
fn story_state() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set("T2", 5.0);
    store.set("hero", "Esme");

    let weather =
        store.define_list(ListDefinition::new("weather", [("hot", 1), ("mild", 2), ("cold", 3)]));
    let mut forecast = ListValue::new();
    forecast.insert(ListItem::new("weather", "hot"), 1);
    forecast.insert(ListItem::new("weather", "mild"), 2);
    forecast.add_origin(weather);
    store.set("forecast", forecast);

    let mut visited = ListValue::new();
    visited.add_origin(store.define_list(ListDefinition::new("rooms",
                                                             [("hall", 1),
                                                              ("cellar", 2),
                                                              ("attic", 3)])));
    store.set("visited_rooms", visited.all());

    store
}

fn eval(store: &MemoryStore, functions: &FunctionRegistry, expr: &Expr) -> Option<Value> {
    quill::evaluate(expr, store, functions).expect("evaluation should succeed")
}

#[test]
fn variable_arithmetic_gates_a_choice() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    // T2 + 2 >= 7
    let condition = bin(bin(var("T2"), BinaryOperator::Add, num(2.0)),
                        BinaryOperator::GreaterEqual,
                        num(7.0));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));

    // T2 + 2 >= 8
    let condition = bin(bin(var("T2"), BinaryOperator::Add, num(2.0)),
                        BinaryOperator::GreaterEqual,
                        num(8.0));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(false)));
}

#[test]
fn unknown_function_is_a_hard_failure() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = call("testFunction", vec![text("hello")]);
    let error = quill::evaluate(&condition, &store, &functions).unwrap_err();

    assert!(matches!(error, RuntimeError::UnknownFunction { .. }));
}

#[test]
fn reserved_truth_words_bypass_the_store() {
    // The store defines neither name; both still resolve.
    let store = MemoryStore::new();
    let functions = FunctionRegistry::new();

    let condition = bin(var("True"), BinaryOperator::And, var("False"));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(false)));

    let condition = bin(var("True"), BinaryOperator::Or, var("False"));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));
}

#[test]
fn list_count_native_counts_items() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = call("LIST_COUNT", vec![var("visited_rooms")]);
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Number(3.0)));
}

#[test]
fn negated_comparison() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    // not (1 > 2)
    let condition = unary(UnaryOperator::Not,
                          bin(num(1.0), BinaryOperator::Greater, num(2.0)));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));
}

#[test]
fn unrecognized_unary_operator_passes_through() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = unary(UnaryOperator::Identity, num(5.0));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Number(5.0)));
}

#[test]
fn division_follows_ieee_754() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = bin(num(1.0), BinaryOperator::Div, num(0.0));
    assert_eq!(eval(&store, &functions, &condition),
               Some(Value::Number(f64::INFINITY)));

    let condition = bin(num(0.0), BinaryOperator::Div, num(0.0));
    match eval(&store, &functions, &condition) {
        Some(Value::Number(n)) => assert!(n.is_nan()),
        other => panic!("expected NaN, got {other:?}"),
    }

    let condition = bin(num(7.0), BinaryOperator::Mod, num(3.0));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Number(1.0)));
}

#[test]
fn string_equality_and_inequality() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = bin(var("hero"), BinaryOperator::Equal, text("Esme"));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));

    let condition = bin(var("hero"), BinaryOperator::NotEqual, text("Bram"));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));

    // Differing kinds compare unequal rather than failing.
    let condition = bin(var("hero"), BinaryOperator::Equal, num(1.0));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(false)));
}

#[test]
fn scalars_coerce_to_numbers_for_arithmetic() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = bin(text("5"), BinaryOperator::Mul, num(2.0));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Number(10.0)));

    let condition = bin(var("True"), BinaryOperator::Add, num(2.0));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Number(3.0)));

    let condition = bin(text("brisk"), BinaryOperator::Add, num(2.0));
    let error = quill::evaluate(&condition, &store, &functions).unwrap_err();
    assert!(matches!(error, RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn logical_operators_require_booleans() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = bin(num(1.0), BinaryOperator::And, var("True"));
    let error = quill::evaluate(&condition, &store, &functions).unwrap_err();
    assert!(matches!(error, RuntimeError::ExpectedBoolean { .. }));
}

#[test]
fn unresolved_variable_policies() {
    let store = story_state();
    let functions = FunctionRegistry::new();
    let condition = var("never_set");

    // Tolerant by default: the condition is absent, not broken.
    assert_eq!(eval(&store, &functions, &condition), None);

    // Strict on request.
    let context = Context::new(&store, &functions)
        .with_unresolved_policy(UnresolvedVariablePolicy::Error);
    let error = context.eval(&condition).unwrap_err();
    assert!(matches!(error, RuntimeError::UnknownVariable { .. }));
}

#[test]
fn missing_operand_aborts_evaluation() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = bin(var("never_set"), BinaryOperator::Add, num(1.0));
    let error = quill::evaluate(&condition, &store, &functions).unwrap_err();
    assert!(matches!(error, RuntimeError::MissingValue { .. }));
}

#[test]
fn mixed_list_and_scalar_operands_are_undefined() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = bin(var("forecast"), BinaryOperator::Greater, num(1.0));
    assert_eq!(eval(&store, &functions, &condition), None);

    let condition = bin(num(1.0), BinaryOperator::Add, var("forecast"));
    assert_eq!(eval(&store, &functions, &condition), None);
}

#[test]
fn both_operands_always_evaluate() {
    let store = story_state();
    let mut functions = FunctionRegistry::new();

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    functions.bind_external("observe", move |args| {
                 if let Some(Value::Number(n)) = args.first() {
                     sink.borrow_mut().push(*n);
                 }
                 Some(Value::Bool(true))
             });

    // `False && observe(1)` must still run the right-hand side.
    let condition = bin(var("False"),
                        BinaryOperator::And,
                        call("observe", vec![num(1.0)]));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(false)));
    assert_eq!(*log.borrow(), vec![1.0]);
}

#[test]
fn function_arguments_evaluate_left_to_right() {
    let store = story_state();
    let mut functions = FunctionRegistry::new();

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    functions.bind_external("tally", move |args| {
                 if let Some(Value::Number(n)) = args.first() {
                     sink.borrow_mut().push(*n);
                 }
                 args.first().cloned()
             });

    let condition = bin(call("tally", vec![num(1.0)]),
                        BinaryOperator::Add,
                        call("tally", vec![num(2.0)]));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Number(3.0)));
    assert_eq!(*log.borrow(), vec![1.0, 2.0]);
}

#[test]
fn dispatch_prefers_native_then_story_then_external() {
    let store = story_state();
    let mut functions = FunctionRegistry::new();

    // A native name cannot be shadowed from outside.
    functions.bind_external("LIST_COUNT", |_args| Some(Value::Number(99.0)));
    let condition = call("LIST_COUNT", vec![var("forecast")]);
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Number(2.0)));

    // A story-defined function wins over an external of the same name.
    functions.define_story_function("mood_check", |_args| Some(Value::Number(1.0)));
    functions.bind_external("mood_check", |_args| Some(Value::Number(2.0)));
    let condition = call("mood_check", vec![]);
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Number(1.0)));
}

#[test]
fn void_external_functions_produce_no_value() {
    let store = story_state();
    let mut functions = FunctionRegistry::new();
    functions.bind_external("ping", |_args| None);

    let condition = call("ping", vec![]);
    assert_eq!(eval(&store, &functions, &condition), None);

    // Using the missing result as an operand is a failure.
    let condition = bin(call("ping", vec![]), BinaryOperator::Add, num(1.0));
    let error = quill::evaluate(&condition, &store, &functions).unwrap_err();
    assert!(matches!(error, RuntimeError::MissingValue { .. }));
}

#[test]
fn native_arity_is_checked() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = call("LIST_COUNT", vec![]);
    let error = quill::evaluate(&condition, &store, &functions).unwrap_err();
    assert!(matches!(error,
                     RuntimeError::ArgumentCountMismatch { expected: 1,
                                                           found: 0,
                                                           .. }));

    let condition = call("LIST_COUNT", vec![num(5.0)]);
    let error = quill::evaluate(&condition, &store, &functions).unwrap_err();
    assert!(matches!(error, RuntimeError::ExpectedList { .. }));
}

#[test]
fn list_literals_resolve_and_union() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let mut expected = ListValue::new();
    expected.insert(weather_item("hot"), 1);
    expected.insert(weather_item("cold"), 3);
    assert_eq!(eval(&store, &functions, &group("(hot, cold)")),
               Some(Value::from(expected)));

    // Item names may be qualified by their definition.
    let mut expected = ListValue::new();
    expected.insert(weather_item("mild"), 2);
    assert_eq!(eval(&store, &functions, &group("(weather.mild)")),
               Some(Value::from(expected)));

    // A literal built from names equals the union of its parts.
    let condition = bin(group("(hot, cold)"),
                        BinaryOperator::Equal,
                        bin(group("(hot)"), BinaryOperator::Add, group("(cold)")));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));
}

#[test]
fn malformed_list_literals_produce_no_value() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    // Not parenthesized.
    assert_eq!(eval(&store, &functions, &group("hot, cold")), None);
    // Empty group.
    assert_eq!(eval(&store, &functions, &group("()")), None);
    // First name is not list-bearing.
    assert_eq!(eval(&store, &functions, &group("(never_set)")), None);
    assert_eq!(eval(&store, &functions, &group("(T2)")), None);

    // A later bad name is a hard failure: the union would be incomplete.
    let error = quill::evaluate(&group("(hot, never_set)"), &store, &functions).unwrap_err();
    assert!(matches!(error, RuntimeError::UnknownVariable { .. }));
    let error = quill::evaluate(&group("(hot, T2)"), &store, &functions).unwrap_err();
    assert!(matches!(error, RuntimeError::ExpectedList { .. }));
}

#[test]
fn containment_operators() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = bin(var("forecast"), BinaryOperator::Has, group("(hot)"));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));

    let condition = bin(var("forecast"), BinaryOperator::Hasnt, group("(cold)"));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));
}

#[test]
fn list_equality_and_difference_through_expressions() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = bin(var("forecast"), BinaryOperator::Equal, group("(hot, mild)"));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));

    let condition = call("LIST_COUNT",
                         vec![bin(var("forecast"), BinaryOperator::Sub, group("(hot)"))]);
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Number(1.0)));
}

#[test]
fn list_natives_walk_the_origin_definition() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let mut hot = ListValue::new();
    hot.insert(weather_item("hot"), 1);
    assert_eq!(eval(&store, &functions, &call("LIST_MIN", vec![var("forecast")])),
               Some(Value::from(hot)));

    let mut mild = ListValue::new();
    mild.insert(weather_item("mild"), 2);
    assert_eq!(eval(&store, &functions, &call("LIST_MAX", vec![var("forecast")])),
               Some(Value::from(mild)));

    assert_eq!(eval(&store, &functions, &call("LIST_VALUE", vec![var("forecast")])),
               Some(Value::Number(2.0)));

    let all = call("LIST_ALL", vec![var("forecast")]);
    assert_eq!(eval(&store, &functions, &call("LIST_COUNT", vec![all])),
               Some(Value::Number(3.0)));

    let mut cold = ListValue::new();
    cold.insert(weather_item("cold"), 3);
    assert_eq!(eval(&store, &functions, &call("LIST_INVERT", vec![var("forecast")])),
               Some(Value::from(cold)));
}

#[test]
fn item_names_resolve_through_the_fallback_path() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let result = eval(&store, &functions, &var("hot")).expect("item should resolve");
    match &result {
        Value::List(list) => assert_eq!(list.len(), 1),
        other => panic!("expected a list, got {other:?}"),
    }

    // A plain variable with the same name would win; here only the item
    // exists, and a bare item name compares equal to its literal.
    let condition = bin(var("hot"), BinaryOperator::Equal, group("(hot)"));
    assert_eq!(eval(&store, &functions, &condition), Some(Value::Bool(true)));
}

#[test]
fn evaluation_is_idempotent_against_fixed_state() {
    let store = story_state();
    let functions = FunctionRegistry::new();

    let condition = bin(bin(var("T2"), BinaryOperator::Add, num(2.0)),
                        BinaryOperator::GreaterEqual,
                        num(7.0));

    let first = eval(&store, &functions, &condition);
    let second = eval(&store, &functions, &condition);
    assert_eq!(first, second);
}
