use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::value::Number};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default absolute tolerance used by `==` and `<>` on reals.
pub const COMPARISON_EPSILON: f64 = 1e-15;
/// Default limit on how deeply expressions may nest.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Tunable limits for evaluating blocks.
///
/// `Options::default()` uses [`MAX_NESTING_DEPTH`] and
/// [`COMPARISON_EPSILON`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Options {
    /// How many parentheses, negations, casts and `if`s may nest inside
    /// one another before the block is rejected.
    pub max_depth: usize,
    /// Absolute tolerance for equality comparisons on reals.
    pub epsilon:   f64,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: MAX_NESTING_DEPTH,
               epsilon:   COMPARISON_EPSILON, }
    }
}

/// The bindings visible inside one `let` block.
///
/// A fresh environment is created for every block and dropped when the block
/// ends, so nothing leaks from one block to the next. Declarations are added
/// in source order; declaring a name twice keeps the later value.
///
/// # Example
/// ```
/// use letcalc::interpreter::{evaluator::core::Environment, value::Number};
///
/// let mut env = Environment::new();
/// env.define("x", Number::Integer(1));
/// env.define("x", Number::Real(2.5));
///
/// assert_eq!(env.lookup("x", 1).unwrap(), Number::Real(2.5));
/// assert!(env.lookup("y", 1).is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Environment {
    bindings: HashMap<String, Number>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn define(&mut self, name: &str, value: Number) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Looks up the value bound to `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if `name` is not bound.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Number> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Returns the number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
