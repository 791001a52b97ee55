use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Two to the power of 63, the first `f64` above `i64::MAX`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use letcalc::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// ## Errors
/// - `RuntimeError::Overflow` if the value is NaN or infinite.
/// - `RuntimeError::LiteralTooLarge` if the truncated value lies outside the
///   `i64` range.
///
/// ## Example
/// ```
/// use letcalc::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(7.9, 1).unwrap(), 7);
/// assert_eq!(f64_to_i64_truncated(-7.9, 1).unwrap(), -7);
///
/// let err = f64_to_i64_truncated(1e19, 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge { line: 3 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::Overflow { line });
    }
    let truncated = value.trunc();
    if !(-TWO_POW_63..TWO_POW_63).contains(&truncated) {
        return Err(RuntimeError::LiteralTooLarge { line });
    }
    Ok(truncated as i64)
}

/// Passes a real result through if it is finite.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` for NaN and infinities, which are never
/// valid numeric values.
///
/// ## Example
/// ```
/// use letcalc::util::num::finite_checked;
///
/// assert_eq!(finite_checked(2.5, 1).unwrap(), 2.5);
/// assert!(finite_checked(f64::MAX * 2.0, 1).is_err());
/// ```
pub const fn finite_checked(value: f64, line: usize) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuntimeError::Overflow { line })
    }
}
