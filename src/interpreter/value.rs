use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_truncated, i64_to_f64_checked},
};

/// The two numeric types of the language.
///
/// Used by type annotations on declarations (`x : int = ...`) and by casts
/// (`real(x)`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumericType {
    /// 64-bit signed integers.
    Int,
    /// 64-bit floating-point reals.
    Real,
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Real => write!(f, "real"),
        }
    }
}

/// Represents a runtime value in the interpreter.
///
/// Exactly one variant is active at a time, and a `Real` is always finite:
/// operations that would produce NaN or an infinity fail instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Number {
    /// Returns the numeric type of the active variant.
    #[must_use]
    pub const fn numeric_type(self) -> NumericType {
        match self {
            Self::Integer(_) => NumericType::Int,
            Self::Real(_) => NumericType::Real,
        }
    }

    /// Returns `true` if the value is exactly zero (`0`, `0.0` or `-0.0`).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Converts the value to an `f64` for mixed arithmetic and comparison.
    ///
    /// Integers beyond 2^53 round to the nearest representable real, as any
    /// integer-to-float promotion does. Use [`Number::cast`] for an exact
    /// conversion.
    ///
    /// # Example
    /// ```
    /// use letcalc::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(10).to_real(), 10.0);
    /// assert_eq!(Number::Real(0.5).to_real(), 0.5);
    /// assert_eq!(Number::Integer(9_007_199_254_740_993).to_real(), 9_007_199_254_740_992.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn to_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Converts the value to the given numeric type.
    ///
    /// Reals are truncated toward zero when cast to `int`; integers must be
    /// exactly representable when cast to `real`. Casting to the value's own
    /// type returns it unchanged.
    ///
    /// # Example
    /// ```
    /// use letcalc::interpreter::value::{Number, NumericType};
    ///
    /// assert_eq!(Number::Real(7.9).cast(NumericType::Int, 1).unwrap(),
    ///            Number::Integer(7));
    /// assert_eq!(Number::Integer(3).cast(NumericType::Real, 1).unwrap(),
    ///            Number::Real(3.0));
    /// assert!(Number::Integer(i64::MAX).cast(NumericType::Real, 1).is_err());
    /// ```
    pub fn cast(self, target: NumericType, line: usize) -> EvalResult<Self> {
        if self.numeric_type() == target {
            return Ok(self);
        }
        match self {
            Self::Real(r) => Ok(Self::Integer(f64_to_i64_truncated(r, line)?)),
            Self::Integer(n) => {
                Ok(Self::Real(i64_to_f64_checked(n, RuntimeError::LiteralTooLarge { line })?))
            },
        }
    }
}

/// Integers print plainly. Integral reals keep a `.0` so the two types stay
/// distinguishable in output.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
