use crate::interpreter::{lexer::Token, value::NumericType};

/// Arithmetic operators combining two numbers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns `true` for the additive operators, `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for the multiplicative operators, `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

/// Comparison operators used in `if` conditions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelationalOperator {
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `<>` or `!=`
    NotEqual,
}

/// Operators applied to a single number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix `-`.
    Negate,
    /// `int(...)` or `real(...)`.
    Cast(NumericType),
}

/// Maps a token to its corresponding arithmetic operator.
///
/// # Example
/// ```
/// use letcalc::interpreter::{
///     lexer::Token,
///     operator::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison operator.
///
/// Both `<>` and `!=` mean "not equal".
#[must_use]
pub const fn token_to_relational_operator(token: &Token) -> Option<RelationalOperator> {
    match token {
        Token::Less => Some(RelationalOperator::Less),
        Token::LessEqual => Some(RelationalOperator::LessEqual),
        Token::Greater => Some(RelationalOperator::Greater),
        Token::GreaterEqual => Some(RelationalOperator::GreaterEqual),
        Token::EqualEqual => Some(RelationalOperator::Equal),
        Token::LessGreater | Token::BangEqual => Some(RelationalOperator::NotEqual),
        _ => None,
    }
}

/// Maps a type keyword to the numeric type it names.
#[must_use]
pub const fn token_to_numeric_type(token: &Token) -> Option<NumericType> {
    match token {
        Token::IntType => Some(NumericType::Int),
        Token::RealType => Some(NumericType::Real),
        _ => None,
    }
}
