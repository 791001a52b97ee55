use crate::{
    error::BlockError,
    interpreter::{
        evaluator::{binary::eval_binary, comparison::eval_relational, core::Environment},
        operator::{BinaryOperator, token_to_binary_operator, token_to_relational_operator},
        parser::{
            core::{Evaluated, Parser},
            utils::combine,
        },
    },
};

impl Parser<'_> {
    /// Parses and evaluates addition and subtraction.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub fn parse_additive(&mut self, env: &Environment) -> Evaluated {
        let mut left = self.parse_multiplicative(env);
        while let Some(op) = self.binary_operator()
                                 .filter(|op| op.is_additive())
        {
            let line = self.line();
            self.advance();
            let right = self.parse_multiplicative(env);
            left = combine(left, right, |l, r| Ok(eval_binary(op, l, r, line)?));
        }
        left
    }

    /// Parses and evaluates multiplication and division.
    ///
    /// Handles left-associative binary operators: `*` and `/`. Binds tighter
    /// than [`Parser::parse_additive`], so `2 + 3 * 4` is `14`.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub fn parse_multiplicative(&mut self, env: &Environment) -> Evaluated {
        let mut left = self.parse_unary(env);
        while let Some(op) = self.binary_operator()
                                 .filter(|op| op.is_multiplicative())
        {
            let line = self.line();
            self.advance();
            let right = self.parse_unary(env);
            left = combine(left, right, |l, r| Ok(eval_binary(op, l, r, line)?));
        }
        left
    }

    /// Parses and evaluates the condition of an `if` expression.
    ///
    /// Exactly one comparison is allowed; comparisons do not chain.
    ///
    /// The rule is: `condition := additive relational_op additive`
    pub fn parse_condition(&mut self, env: &Environment) -> Evaluated<bool> {
        let left = self.parse_additive(env);

        let Some(op) = self.current
                           .token()
                           .and_then(token_to_relational_operator)
        else {
            let missing = BlockError::from(self.unexpected("a comparison operator"));
            return Err(match left {
                           Ok(_) => missing,
                           Err(e) => e.merge(missing),
                       });
        };

        let epsilon = self.options.epsilon;
        self.advance();

        let right = self.parse_additive(env);
        combine(left, right, |l, r| Ok(eval_relational(op, l, r, epsilon)))
    }

    fn binary_operator(&self) -> Option<BinaryOperator> {
        self.current.token().and_then(token_to_binary_operator)
    }
}
