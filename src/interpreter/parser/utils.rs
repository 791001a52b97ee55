use crate::interpreter::{
    lexer::Token,
    operator::token_to_numeric_type,
    parser::core::{Evaluated, Parser},
    value::NumericType,
};

/// Combines two rule outcomes that were both parsed.
///
/// If either failed, `apply` is not called. When both failed, the earlier
/// failure wins unless only the later one is syntactic (see
/// [`BlockError::merge`](crate::error::BlockError::merge)).
pub(in crate::interpreter::parser) fn combine<A, B, T>(left: Evaluated<A>,
                                                       right: Evaluated<B>,
                                                       apply: impl FnOnce(A, B) -> Evaluated<T>)
                                                       -> Evaluated<T> {
    match (left, right) {
        (Ok(a), Ok(b)) => apply(a, b),
        (Err(earlier), Err(later)) => Err(earlier.merge(later)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
    }
}

/// Keeps `value` only if the token check that followed it also succeeded.
pub(in crate::interpreter::parser) fn followed_by<T>(value: Evaluated<T>,
                                                     status: Evaluated<()>)
                                                     -> Evaluated<T> {
    combine(value, status, |v, ()| Ok(v))
}

impl Parser<'_> {
    /// Parses a plain identifier and returns its name.
    ///
    /// Nothing is consumed if the lookahead is not an identifier.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> Evaluated<String> {
        if let Some(Token::Identifier(name)) = self.current.token() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected("an identifier").into())
        }
    }

    /// Parses an optional `: int` or `: real` annotation.
    ///
    /// Grammar: `annotation := (":" ("int" | "real"))?`
    pub(in crate::interpreter::parser) fn parse_type_annotation(&mut self)
                                                                -> Evaluated<Option<NumericType>> {
        if !self.check(&Token::Colon) {
            return Ok(None);
        }
        self.advance();

        match self.current.token().and_then(token_to_numeric_type) {
            Some(numeric_type) => {
                self.advance();
                Ok(Some(numeric_type))
            },
            None => Err(self.unexpected("'int' or 'real'").into()),
        }
    }
}
