/// Runtime value representations.
///
/// Declares the dynamically-typed `Value` union that flows through
/// evaluation, and the multi-valued list type with its set algebra.
pub mod value;

/// Read-only story state interfaces.
///
/// Defines the variable-store and function-table seams the evaluator reads
/// through, plus in-memory implementations for hosts and tests.
pub mod state;

/// Expression evaluation.
///
/// Walks a parsed expression tree against story state and produces a runtime
/// value: operator resolution, function dispatch, and list-literal
/// construction.
pub mod evaluator;
