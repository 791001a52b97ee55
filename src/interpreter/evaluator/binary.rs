use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, operator::BinaryOperator, value::Number},
    util::num::finite_checked,
};

/// Evaluates an arithmetic operation between two numbers.
///
/// Two integers produce an integer; if either side is real, the other is
/// promoted and the result is real. Integer division truncates toward zero.
/// Division by an exactly zero divisor is checked explicitly for both types.
///
/// # Errors
/// - `DivisionByZero` when the divisor is `0` or `0.0`.
/// - `Overflow` when integer arithmetic overflows or a real result is not
///   finite.
///
/// # Example
/// ```
/// use letcalc::interpreter::{
///     evaluator::binary::eval_binary,
///     operator::BinaryOperator,
///     value::Number,
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, Number::Integer(3), Number::Integer(4), 1);
/// assert_eq!(sum.unwrap(), Number::Integer(7));
///
/// let product = eval_binary(BinaryOperator::Mul, Number::Real(2.5), Number::Integer(2), 1);
/// assert_eq!(product.unwrap(), Number::Real(5.0));
///
/// let quotient = eval_binary(BinaryOperator::Div, Number::Integer(7), Number::Integer(2), 1);
/// assert_eq!(quotient.unwrap(), Number::Integer(3));
///
/// assert!(eval_binary(BinaryOperator::Div, Number::Integer(1), Number::Real(0.0), 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   line: usize)
                   -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Number::{Integer, Real};

    if op == Div && right.is_zero() {
        return Err(RuntimeError::DivisionByZero { line });
    }

    match (left, right) {
        (Integer(a), Integer(b)) => {
            let result = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                Mul => a.checked_mul(b),
                Div => a.checked_div(b),
            };
            result.map(Integer)
                  .ok_or(RuntimeError::Overflow { line })
        },
        _ => {
            let left = left.to_real();
            let right = right.to_real();

            let result = match op {
                Add => left + right,
                Sub => left - right,
                Mul => left * right,
                Div => left / right,
            };
            Ok(Real(finite_checked(result, line)?))
        },
    }
}
