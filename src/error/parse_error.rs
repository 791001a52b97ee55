#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// What was expected, and what was found instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of the block while more input was required.
    UnexpectedEndOfInput {
        /// What was expected.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Text that matches no token rule, or a malformed numeric literal such
    /// as `3.` or an integer that does not fit in 64 bits.
    InvalidToken {
        /// The offending source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after the closing `end ;` of a block.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Expressions were nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { expected, line } => {
                write!(f, "Error on line {line}: Unexpected end of input, expected {expected}.")
            },

            Self::InvalidToken { text, line } => {
                write!(f, "Error on line {line}: Invalid token '{text}'.")
            },

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after 'end ;'. Check your input: {token}"),

            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Expression nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
