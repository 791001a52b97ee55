/// Binary operator evaluation logic.
///
/// Implements `+`, `-`, `*` and `/` with integer-to-real promotion and
/// checked overflow and division by zero.
pub mod binary;

/// Comparison evaluation for `if` conditions.
pub mod comparison;

/// Core evaluation types.
///
/// Contains the result alias, the block-scoped binding environment and the
/// tunable evaluation options.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements negation and the `int`/`real` casts.
pub mod unary;
