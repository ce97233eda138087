/// Dispatch precedence, the native-function table, and arity checking.
pub mod core;

/// The fixed list-native functions (`LIST_MIN`, `LIST_MAX`, `LIST_ALL`,
/// `LIST_COUNT`, `LIST_VALUE`, `LIST_INVERT`).
pub mod native;
