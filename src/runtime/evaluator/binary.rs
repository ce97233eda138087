/// Operand-driven resolution between the list, boolean, and numeric
/// operator tables.
pub mod core;

/// The list-operator table: set algebra, containment, and ordinal-range
/// orderings.
pub mod list;

/// Logical operators over booleans.
pub mod logic;

/// Numeric arithmetic and ordering comparisons, with coercion.
pub mod numeric;
