use crate::interpreter::{operator::RelationalOperator, value::Number};

/// Evaluates a comparison between two numbers.
///
/// Integers are compared exactly. If either side is real, both are compared
/// as reals; `==` and `<>` then treat values closer than `epsilon` as equal,
/// while the ordering operators stay exact.
///
/// # Example
/// ```
/// use letcalc::interpreter::{
///     evaluator::comparison::eval_relational,
///     operator::RelationalOperator,
///     value::Number,
/// };
///
/// assert!(eval_relational(RelationalOperator::Less, Number::Integer(2), Number::Real(2.5), 1e-15));
///
/// let eq = eval_relational(RelationalOperator::Equal,
///                          Number::Real(0.1 + 0.2),
///                          Number::Real(0.3),
///                          1e-12);
/// assert!(eq);
/// ```
#[must_use]
pub fn eval_relational(op: RelationalOperator,
                       left: Number,
                       right: Number,
                       epsilon: f64)
                       -> bool {
    use RelationalOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    if let (Number::Integer(a), Number::Integer(b)) = (left, right) {
        return match op {
            Less => a < b,
            LessEqual => a <= b,
            Greater => a > b,
            GreaterEqual => a >= b,
            Equal => a == b,
            NotEqual => a != b,
        };
    }

    let a = left.to_real();
    let b = right.to_real();

    match op {
        Less => a < b,
        LessEqual => a <= b,
        Greater => a > b,
        GreaterEqual => a >= b,
        Equal => (a - b).abs() <= epsilon,
        NotEqual => (a - b).abs() > epsilon,
    }
}
