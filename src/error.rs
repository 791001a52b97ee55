/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// block: unexpected or invalid tokens, missing keywords and delimiters,
/// trailing input and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing a block's
/// value: unknown variables, division by zero, overflow and inexact
/// conversions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The reason a block was reported as `Error`.
///
/// Only one failure per block is kept (see [`BlockError::merge`]). Callers
/// that only need the single "this block failed" bit can ignore the contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    /// The block is lexically or syntactically malformed.
    Parse(ParseError),
    /// The block is well formed but its value could not be computed.
    Runtime(RuntimeError),
}

impl BlockError {
    /// Returns `true` when the failure is lexical or syntactic rather than a
    /// failure to compute a value.
    ///
    /// # Example
    /// ```
    /// use letcalc::error::{BlockError, ParseError, RuntimeError};
    ///
    /// let parse = BlockError::from(ParseError::UnexpectedEndOfInput { expected: "';'".into(),
    ///                                                                 line:     1, });
    /// let runtime = BlockError::from(RuntimeError::DivisionByZero { line: 1 });
    ///
    /// assert!(parse.is_syntactic());
    /// assert!(!runtime.is_syntactic());
    /// ```
    #[must_use]
    pub const fn is_syntactic(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Picks the failure to report when two parts of a block both failed.
    ///
    /// `self` is the earlier failure and wins, unless only `later` is
    /// syntactic: a malformed block is always reported as malformed.
    ///
    /// # Example
    /// ```
    /// use letcalc::error::{BlockError, ParseError, RuntimeError};
    ///
    /// let runtime = BlockError::from(RuntimeError::DivisionByZero { line: 1 });
    /// let parse = BlockError::from(ParseError::UnexpectedEndOfInput { expected: "')'".into(),
    ///                                                                 line:     2, });
    ///
    /// assert_eq!(runtime.clone().merge(parse.clone()), parse);
    /// assert_eq!(parse.clone().merge(runtime), parse);
    /// ```
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        if !self.is_syntactic() && later.is_syntactic() { later } else { self }
    }
}

impl From<ParseError> for BlockError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for BlockError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BlockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
