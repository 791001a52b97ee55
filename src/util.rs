/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `i64` and
/// `f64` without silent data loss, and for rejecting non-finite reals.
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid,
/// or an error if the value is out of range or not finite.
pub mod num;
