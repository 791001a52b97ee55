use crate::interpreter::{
    evaluator::{core::Environment, unary::eval_unary},
    lexer::Token,
    operator::UnaryOperator,
    parser::{
        core::{Evaluated, Parser},
        utils::followed_by,
    },
    value::{Number, NumericType},
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// A prefix `-` negates its operand and keeps its integer or real type.
    /// Negation is right-associative, so `--x` is `-(-x)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := "-" unary
    ///            | primary
    /// ```
    pub fn parse_unary(&mut self, env: &Environment) -> Evaluated {
        if self.check(&Token::Minus) {
            let line = self.line();
            self.advance();
            let operand = self.nested(|parser| parser.parse_unary(env));
            return operand.and_then(|v| Ok(eval_unary(UnaryOperator::Negate, v, line)?));
        }
        self.parse_primary(env)
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := integer | real | identifier
    ///              | "(" expression ")"
    ///              | ("int" | "real") "(" expression ")"
    /// ```
    ///
    /// An identifier evaluates to its binding in `env`; an unbound name is a
    /// failure. Any other lookahead, including invalid input, is a failure
    /// and is left unconsumed.
    pub fn parse_primary(&mut self, env: &Environment) -> Evaluated {
        let line = self.line();

        match self.current.token() {
            Some(Token::Integer(n)) => {
                let value = Number::Integer(*n);
                self.advance();
                Ok(value)
            },
            Some(Token::Real(r)) => {
                let value = Number::Real(*r);
                self.advance();
                Ok(value)
            },
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                Ok(env.lookup(&name, line)?)
            },
            Some(Token::LParen) => self.parse_grouping(env),
            Some(Token::IntType) => self.parse_cast(env, NumericType::Int),
            Some(Token::RealType) => self.parse_cast(env, NumericType::Real),
            _ => Err(self.unexpected("an expression").into()),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    fn parse_grouping(&mut self, env: &Environment) -> Evaluated {
        self.nested(|parser| {
                parser.advance();
                let value = parser.parse_expression(env);
                let close = parser.expect(&Token::RParen);
                followed_by(value, close)
            })
    }

    /// Parses a cast such as `int(x / 2)` or `real(n)`.
    ///
    /// Grammar: `cast := ("int" | "real") "(" expression ")"`
    fn parse_cast(&mut self, env: &Environment, target: NumericType) -> Evaluated {
        let line = self.line();
        self.nested(|parser| {
                parser.advance();
                let open = parser.expect(&Token::LParen);
                let value = parser.parse_expression(env);
                let close = parser.expect(&Token::RParen);

                open.and(followed_by(value, close))
                    .and_then(|v| Ok(eval_unary(UnaryOperator::Cast(target), v, line)?))
            })
    }

    /// Parses a conditional expression.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition> then <expression> else <expression>
    /// ```
    ///
    /// Both branches are always parsed and evaluated. A lexical or syntactic
    /// failure anywhere fails the whole expression. An evaluation failure
    /// only counts if it happens in the condition or in the branch that is
    /// selected, so `if x == 0 then 0 else 1 / x` is fine for `x = 0`.
    pub fn parse_if(&mut self, env: &Environment) -> Evaluated {
        self.nested(|parser| {
                parser.advance();
                let condition = parser.parse_condition(env);
                let then_keyword = parser.expect(&Token::Then);
                let then_branch = parser.parse_expression(env);
                let else_keyword = parser.expect(&Token::Else);
                let else_branch = parser.parse_expression(env);

                let syntax_error = [condition.as_ref().err(),
                                    then_keyword.as_ref().err(),
                                    then_branch.as_ref().err(),
                                    else_keyword.as_ref().err(),
                                    else_branch.as_ref().err()].into_iter()
                                                               .flatten()
                                                               .find(|e| e.is_syntactic())
                                                               .cloned();
                if let Some(e) = syntax_error {
                    return Err(e);
                }

                if condition? { then_branch } else { else_branch }
            })
    }
}
