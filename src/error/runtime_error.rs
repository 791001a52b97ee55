#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a block.
pub enum RuntimeError {
    /// Tried to use a variable that is not bound in the current block.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by an exactly zero divisor.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic overflowed, or a real result was not finite.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value could not be represented exactly in the target numeric type.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Numeric overflow while trying to compute result."),
            Self::LiteralTooLarge { line } => write!(f,
                                                     "Error on line {line}: Value is too large to be converted exactly."),
        }
    }
}

impl std::error::Error for RuntimeError {}
