use crate::{
    error::{BlockError, ParseError},
    interpreter::{
        evaluator::core::{Environment, Options},
        lexer::{Lexeme, Lexer, Token},
        value::Number,
    },
};

/// The outcome of parsing and evaluating one grammar rule.
///
/// A failed rule still leaves the cursor past everything it could consume,
/// so callers keep parsing and only one failure is reported: the first
/// syntactic one, or else the first evaluation failure.
pub type Evaluated<T = Number> = Result<T, BlockError>;

/// A recursive-descent parser that evaluates as it goes.
///
/// The parser pulls tokens from a [`Lexer`] and keeps exactly one token of
/// lookahead. Each `parse_*` method recognizes one grammar rule and returns
/// the rule's value directly; no syntax tree is built.
///
/// A parser handles a single block. See [`Parser::parse_block`].
pub struct Parser<'src> {
    pub(super) lexer:   Lexer<'src>,
    pub(super) current: Lexeme,
    pub(super) options: Options,
    pub(super) depth:   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`, whose first line is line 1.
    #[must_use]
    pub fn new(source: &'src str, options: Options) -> Self {
        Self::with_line(source, 1, options)
    }

    /// Creates a parser over `source`, whose first line is `line`.
    #[must_use]
    pub fn with_line(source: &'src str, line: usize, options: Options) -> Self {
        let mut lexer = Lexer::with_line(source, line);
        let current = lexer.next_lexeme();
        Self { lexer,
               current,
               options,
               depth: 0 }
    }

    /// Returns the source line of the lookahead lexeme.
    pub(super) const fn line(&self) -> usize {
        self.current.line()
    }

    /// Returns `true` if the lookahead is exactly `token`.
    pub(super) fn check(&self, token: &Token) -> bool {
        self.current.is(token)
    }

    /// Moves to the next lexeme and returns the one that was current.
    pub(super) fn advance(&mut self) -> Lexeme {
        let next = self.lexer.next_lexeme();
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the lookahead if it is `expected`.
    ///
    /// On a mismatch nothing is consumed and an error is returned, so the
    /// caller can carry on with the rest of its rule.
    pub(super) fn expect(&mut self, expected: &Token) -> Evaluated<()> {
        if self.check(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{expected}'")).into())
        }
    }

    /// Builds the error for finding the lookahead where `expected` was
    /// required.
    pub(super) fn unexpected(&self, expected: &str) -> ParseError {
        match &self.current {
            Lexeme::Token { token, line } => {
                ParseError::UnexpectedToken { token: format!("expected {expected}, found '{token}'"),
                                              line:  *line, }
            },
            Lexeme::Invalid { text, line } => ParseError::InvalidToken { text: text.clone(),
                                                                         line: *line, },
            Lexeme::EndOfInput { line } => {
                ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                   line:     *line, }
            },
        }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Fails without consuming anything once the configured maximum depth is
    /// reached.
    pub(super) fn nested<T>(&mut self,
                            parse: impl FnOnce(&mut Self) -> Evaluated<T>)
                            -> Evaluated<T> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.options.max_depth,
                                                    line:  self.line(), }.into());
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses and evaluates a full expression.
    ///
    /// Grammar: `expression := "if" condition "then" expression "else"
    /// expression | additive`
    pub fn parse_expression(&mut self, env: &Environment) -> Evaluated {
        if self.check(&Token::If) {
            self.parse_if(env)
        } else {
            self.parse_additive(env)
        }
    }
}
