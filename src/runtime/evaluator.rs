/// Core evaluation logic and context management.
///
/// Contains the main evaluation dispatch, the read-only context, variable
/// resolution, and list-literal construction.
pub mod core;

/// Binary operator resolution.
///
/// Handles the execution of all binary operations between evaluated
/// operands: list algebra, logical operators, equality, and numeric
/// arithmetic and comparisons.
pub mod binary;

/// Unary operator application.
pub mod unary;

/// Function call dispatch.
///
/// Handles list-native, story-defined, and externally bound function calls,
/// including argument evaluation and arity checking.
pub mod function;
