//! # quill
//!
//! quill is a runtime condition evaluator for narrative scripts. It walks a
//! previously-parsed expression tree and resolves it against the live state
//! of an executing story: variable bindings, externally bound callback
//! functions, story-defined functions, and a multi-valued list type used for
//! flags and enumerations. A host can test arbitrary boolean or arithmetic
//! conditions (such as choice gating expressions) at any point during
//! playback without re-running the story's own instruction-pointer virtual
//! machine.
//!
//! Evaluation is read-only: list set-operations produce new list values and
//! nothing is ever written back to story state.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    runtime::{
        evaluator::core::{Context, EvalResult},
        state::{FunctionTable, VariableStore},
        value::core::Value,
    },
};

/// Defines the structure of parsed condition expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent a condition as a tree. The tree is built by an external parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node kinds for all condition constructs.
/// - Attaches source locations to nodes for error reporting.
/// - Keeps the node set closed so evaluation is exhaustively checked.
pub mod ast;
/// Provides the unified error type for evaluation.
///
/// This module defines all errors that can be raised while resolving a
/// condition. It standardizes error reporting and carries the source line of
/// the failing node for host-side feedback.
///
/// # Responsibilities
/// - Defines the error enum for all evaluation failure modes.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The story-facing runtime: values, state interfaces, and the evaluator.
///
/// This module ties together the runtime value model, the read-only story
/// state seams, and the evaluation engine that bridges the parsed tree to
/// live state.
///
/// # Responsibilities
/// - Defines the runtime value union and the list type's set algebra.
/// - Declares the variable-store and function-table interfaces the host
///   supplies.
/// - Walks expression trees and resolves operators and function calls.
pub mod runtime;

/// Evaluates one expression tree against the given story state.
///
/// This is the one-shot entry point: it builds a [`Context`] with the
/// default tolerant unresolved-variable policy and evaluates the tree. Hosts
/// testing many conditions against the same state can build the [`Context`]
/// once instead.
///
/// `Ok(None)` means the condition produced no value (absent state); a host
/// gating a choice decides its own fallback, typically treating it as false.
///
/// # Errors
/// Returns a [`RuntimeError`](error::RuntimeError) when the tree calls an
/// unknown function, applies an operator to operands it has no semantics
/// for, or requires a value a subexpression did not produce.
///
/// # Examples
/// ```
/// use quill::{
///     ast::{BinaryOperator, Expr},
///     runtime::{
///         state::{FunctionRegistry, MemoryStore},
///         value::core::Value,
///     },
/// };
///
/// let mut store = MemoryStore::new();
/// store.set("T2", 5.0);
/// let functions = FunctionRegistry::new();
///
/// // T2 + 2 >= 7
/// let condition = Expr::BinaryOp {
///     left: Box::new(Expr::BinaryOp {
///         left: Box::new(Expr::Variable { name: "T2".to_string(), line: 1 }),
///         op: BinaryOperator::Add,
///         right: Box::new(Expr::Number { value: 2.0, line: 1 }),
///         line: 1,
///     }),
///     op: BinaryOperator::GreaterEqual,
///     right: Box::new(Expr::Number { value: 7.0, line: 1 }),
///     line: 1,
/// };
///
/// let result = quill::evaluate(&condition, &store, &functions).unwrap();
/// assert_eq!(result, Some(Value::Bool(true)));
/// ```
pub fn evaluate(expr: &Expr,
                variables: &dyn VariableStore,
                functions: &dyn FunctionTable)
                -> EvalResult<Option<Value>> {
    Context::new(variables, functions).eval(expr)
}
