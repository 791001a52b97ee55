use std::fmt;

use log::trace;
use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.14` or `2.0`.
    ///
    /// A digit run followed by a `.` with no further digits (`3.`) is
    /// malformed and produces a lexing error.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `let`
    #[token("let", ignore(case))]
    Let,
    /// `in`
    #[token("in", ignore(case))]
    In,
    /// `end`
    #[token("end", ignore(case))]
    End,
    /// `if`
    #[token("if", ignore(case))]
    If,
    /// `then`
    #[token("then", ignore(case))]
    Then,
    /// `else`
    #[token("else", ignore(case))]
    Else,
    /// `int`, used for type annotations and casts.
    #[token("int", ignore(case))]
    IntType,
    /// `real`, used for type annotations and casts.
    #[token("real", ignore(case))]
    RealType,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<>`
    #[token("<>")]
    LessGreater,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Line breaks. Skipped, but counted for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// The lexical class of a token.
///
/// Every [`Lexeme`] falls into exactly one class. The parser mostly matches on
/// concrete tokens; the class is what diagnostics and tests look at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer literal.
    IntLiteral,
    /// A real literal.
    RealLiteral,
    /// A name that is not a keyword.
    Identifier,
    /// One of the reserved words.
    Keyword,
    /// An arithmetic, assignment or comparison operator.
    Operator,
    /// Punctuation: `;`, `:`, `,`, `(` and `)`.
    Delimiter,
    /// Input is exhausted.
    EndOfInput,
    /// Text that matches no token rule.
    Invalid,
}

impl Token {
    /// Returns the lexical class of this token.
    ///
    /// # Example
    /// ```
    /// use letcalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Let.kind(), TokenKind::Keyword);
    /// assert_eq!(Token::Integer(3).kind(), TokenKind::IntLiteral);
    /// assert_eq!(Token::LessGreater.kind(), TokenKind::Operator);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Real(_) => TokenKind::RealLiteral,
            Self::Integer(_) => TokenKind::IntLiteral,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Let
            | Self::In
            | Self::End
            | Self::If
            | Self::Then
            | Self::Else
            | Self::IntType
            | Self::RealType => TokenKind::Keyword,
            Self::Plus
            | Self::Minus
            | Self::Star
            | Self::Slash
            | Self::Equals
            | Self::EqualEqual
            | Self::LessGreater
            | Self::BangEqual
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Less
            | Self::Greater => TokenKind::Operator,
            Self::Semicolon
            | Self::Colon
            | Self::Comma
            | Self::LParen
            | Self::RParen
            | Self::Comment
            | Self::MultiLineComment
            | Self::NewLine
            | Self::Ignored => TokenKind::Delimiter,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Let => write!(f, "let"),
            Self::In => write!(f, "in"),
            Self::End => write!(f, "end"),
            Self::If => write!(f, "if"),
            Self::Then => write!(f, "then"),
            Self::Else => write!(f, "else"),
            Self::IntType => write!(f, "int"),
            Self::RealType => write!(f, "real"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Equals => write!(f, "="),
            Self::EqualEqual => write!(f, "=="),
            Self::LessGreater => write!(f, "<>"),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Semicolon => write!(f, ";"),
            Self::Colon => write!(f, ":"),
            Self::Comma => write!(f, ","),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comment | Self::MultiLineComment => write!(f, "comment"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a real literal from the current token slice.
///
/// Returns `None` for a trailing `.` without digits, or for a literal too
/// large to be a finite `f64`. The lexer then reports the slice as invalid.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    if slice.ends_with('.') {
        return None;
    }
    slice.parse().ok().filter(|r: &f64| r.is_finite())
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// One item pulled from a [`Lexer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    /// A recognized token.
    Token {
        /// The token itself.
        token: Token,
        /// The source line the token starts on.
        line:  usize,
    },
    /// Text that matched no token rule, or a malformed numeric literal.
    Invalid {
        /// The offending source text.
        text: String,
        /// The source line where it was found.
        line: usize,
    },
    /// The input is exhausted.
    EndOfInput {
        /// The last line of the input.
        line: usize,
    },
}

impl Lexeme {
    /// Returns the source line of this lexeme.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Token { line, .. } | Self::Invalid { line, .. } | Self::EndOfInput { line } => {
                *line
            },
        }
    }

    /// Returns the lexical class of this lexeme.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Token { token, .. } => token.kind(),
            Self::Invalid { .. } => TokenKind::Invalid,
            Self::EndOfInput { .. } => TokenKind::EndOfInput,
        }
    }

    /// Returns the token, if this lexeme is one.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        match self {
            Self::Token { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Returns `true` if this lexeme is exactly `expected`.
    #[must_use]
    pub fn is(&self, expected: &Token) -> bool {
        self.token() == Some(expected)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token { token, .. } => write!(f, "'{token}'"),
            Self::Invalid { text, .. } => write!(f, "invalid input '{text}'"),
            Self::EndOfInput { .. } => write!(f, "end of input"),
        }
    }
}

/// A pull-based tokenizer over one piece of source text.
///
/// Tokens are produced on demand by [`Lexer::next_lexeme`], with one token of
/// lookahead through [`Lexer::peek`]. Once the input is exhausted, every
/// further request yields [`Lexeme::EndOfInput`].
///
/// # Example
/// ```
/// use letcalc::interpreter::lexer::{Lexeme, Lexer, Token, TokenKind};
///
/// let mut lexer = Lexer::new("x = 2.5");
/// assert_eq!(lexer.next_lexeme().kind(), TokenKind::Identifier);
/// assert!(lexer.peek().is(&Token::Equals));
/// assert!(lexer.next_lexeme().is(&Token::Equals));
/// assert!(lexer.next_lexeme().is(&Token::Real(2.5)));
/// assert_eq!(lexer.next_lexeme(), Lexeme::EndOfInput { line: 1 });
/// assert_eq!(lexer.next_lexeme(), Lexeme::EndOfInput { line: 1 });
/// ```
pub struct Lexer<'src> {
    inner:     logos::Lexer<'src, Token>,
    peeked:    Option<Lexeme>,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer whose first line is line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_line(source, 1)
    }

    /// Creates a lexer whose first line is `line`.
    ///
    /// Used when the text is a slice of a larger source, so that reported
    /// lines refer to the whole source.
    #[must_use]
    pub fn with_line(source: &'src str, line: usize) -> Self {
        Self { inner:     Token::lexer_with_extras(source, LexerExtras { line }),
               peeked:    None,
               exhausted: false, }
    }

    /// Consumes and returns the next lexeme.
    pub fn next_lexeme(&mut self) -> Lexeme {
        match self.peeked.take() {
            Some(lexeme) => lexeme,
            None => self.scan(),
        }
    }

    /// Returns the next lexeme without consuming it.
    pub fn peek(&mut self) -> &Lexeme {
        let lexeme = match self.peeked.take() {
            Some(lexeme) => lexeme,
            None => self.scan(),
        };
        self.peeked.insert(lexeme)
    }

    fn scan(&mut self) -> Lexeme {
        let line = self.inner.extras.line;
        if self.exhausted {
            return Lexeme::EndOfInput { line };
        }

        let lexeme = match self.inner.next() {
            Some(Ok(token)) => Lexeme::Token { token,
                                               line: self.inner.extras.line },
            Some(Err(())) => Lexeme::Invalid { text: self.inner.slice().to_string(),
                                               line: self.inner.extras.line, },
            None => {
                self.exhausted = true;
                Lexeme::EndOfInput { line: self.inner.extras.line }
            },
        };
        trace!("lexed {lexeme} on line {}", lexeme.line());
        lexeme
    }
}
