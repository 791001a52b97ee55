use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, operator::UnaryOperator, value::Number},
};

/// Evaluates a unary operation on a number.
///
/// Supported operators:
/// - `Negate`: numeric negation, keeping the integer or real type.
/// - `Cast(t)`: conversion to `t`, see [`Number::cast`].
///
/// # Errors
/// - `Overflow` when negating `i64::MIN`.
/// - Any error from [`Number::cast`].
///
/// # Example
/// ```
/// use letcalc::interpreter::{
///     evaluator::unary::eval_unary,
///     operator::UnaryOperator,
///     value::{Number, NumericType},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, Number::Integer(5), 1).unwrap();
/// assert_eq!(v, Number::Integer(-5));
///
/// let v = eval_unary(UnaryOperator::Cast(NumericType::Int), Number::Real(-2.7), 1).unwrap();
/// assert_eq!(v, Number::Integer(-2));
/// ```
pub fn eval_unary(op: UnaryOperator, value: Number, line: usize) -> EvalResult<Number> {
    match op {
        UnaryOperator::Negate => match value {
            Number::Integer(n) => n.checked_neg()
                                   .map(Number::Integer)
                                   .ok_or(RuntimeError::Overflow { line }),
            Number::Real(r) => Ok(Number::Real(-r)),
        },
        UnaryOperator::Cast(target) => value.cast(target, line),
    }
}
