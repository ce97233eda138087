/// The core runtime value union and its coercions.
pub mod core;

/// List values: origin-tagged items, ordinals, and set algebra.
pub mod list;
