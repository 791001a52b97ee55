use log::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{core::Environment, unary::eval_unary},
        lexer::{Lexeme, Token},
        operator::UnaryOperator,
        parser::{
            core::{Evaluated, Parser},
            utils::{combine, followed_by},
        },
    },
};

impl Parser<'_> {
    /// Parses and evaluates one complete block.
    ///
    /// Grammar: `block := "let" declaration+ "in" expression "end" ";"`
    ///
    /// Declarations are evaluated in order into a fresh [`Environment`] that
    /// is dropped when the block ends. After a failure the rest of the block
    /// is still parsed. The first syntactic failure is returned if there is
    /// one, otherwise the first evaluation failure. Any token left after the
    /// closing `;` fails the block.
    ///
    /// # Example
    /// ```
    /// use letcalc::interpreter::{
    ///     evaluator::core::Options,
    ///     parser::core::Parser,
    ///     value::Number,
    /// };
    ///
    /// let mut parser = Parser::new("let x = 2; y = x * 3; in y + 1 end;", Options::default());
    /// assert_eq!(parser.parse_block().unwrap(), Number::Integer(7));
    ///
    /// let mut parser = Parser::new("let x = 1 in x end;", Options::default());
    /// assert!(parser.parse_block().is_err());
    /// ```
    pub fn parse_block(&mut self) -> Evaluated {
        let mut env = Environment::new();

        let mut status = self.expect(&Token::Let);
        status = followed_by(status, self.parse_declaration(&mut env));
        while matches!(self.current.token(), Some(Token::Identifier(_))) {
            status = followed_by(status, self.parse_declaration(&mut env));
        }
        status = followed_by(status, self.expect(&Token::In));

        let value = combine(status, self.parse_expression(&env), |(), v| Ok(v));

        let mut closing = self.expect(&Token::End);
        closing = followed_by(closing, self.expect(&Token::Semicolon));
        closing = followed_by(closing, self.expect_end_of_input());

        debug!("block closed with {} binding(s)", env.len());
        followed_by(value, closing)
    }

    /// Parses one declaration and binds its value.
    ///
    /// Grammar: `declaration := identifier (":" type)? "=" expression ";"`
    ///
    /// The right-hand side sees every earlier declaration of the block. With
    /// a type annotation, the value is cast to that type before binding.
    /// Nothing is bound if any part of the declaration fails.
    pub fn parse_declaration(&mut self, env: &mut Environment) -> Evaluated<()> {
        let line = self.line();

        let name = self.parse_identifier();
        let annotation = self.parse_type_annotation();
        let equals = self.expect(&Token::Equals);
        let value = self.parse_expression(env);
        let semicolon = self.expect(&Token::Semicolon);

        let head = combine(name, annotation, |name, annotation| Ok((name, annotation)));
        let (name, annotation, mut value) = combine(followed_by(head, equals),
                                                    followed_by(value, semicolon),
                                                    |(name, annotation), value| {
                                                        Ok((name, annotation, value))
                                                    })?;

        if let Some(numeric_type) = annotation {
            value = eval_unary(UnaryOperator::Cast(numeric_type), value, line)?;
        }
        debug!("line {line}: {name} = {value} ({})", value.numeric_type());
        env.define(&name, value);
        Ok(())
    }

    /// Succeeds only if no input is left.
    fn expect_end_of_input(&self) -> Evaluated<()> {
        match &self.current {
            Lexeme::EndOfInput { .. } => Ok(()),
            Lexeme::Token { token, line } => {
                Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                           line:  *line, }.into())
            },
            Lexeme::Invalid { text, line } => Err(ParseError::InvalidToken { text: text.clone(),
                                                                             line: *line, }.into()),
        }
    }
}
