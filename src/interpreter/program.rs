use log::debug;
use logos::Logos;

use crate::interpreter::{
    evaluator::core::Options,
    lexer::{LexerExtras, Token},
    parser::core::{Evaluated, Parser},
};

/// What a failed block prints as.
pub const ERROR_MARKER: &str = "Error";

/// One block of a program: its source text and the line it starts on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Block<'src> {
    /// The block's text, from its `let` up to the next block.
    pub text: &'src str,
    /// The source line of the block's first token.
    pub line: usize,
}

/// Splits a program into blocks.
///
/// Every `let` keyword starts a new block, which runs up to the next `let`
/// or the end of the source. Anything before the first `let` becomes a block
/// of its own (and fails to evaluate). Whitespace and comments alone produce
/// no blocks.
///
/// # Example
/// ```
/// use letcalc::interpreter::program::split_blocks;
///
/// let blocks = split_blocks("let x = 1; in x end;\nlet y = 2; in y end;");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].text, "let x = 1; in x end;\n");
/// assert_eq!(blocks[1].line, 2);
/// ```
#[must_use]
pub fn split_blocks(source: &str) -> Vec<Block<'_>> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut starts: Vec<(usize, usize)> = Vec::new();

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        if starts.is_empty() || matches!(token, Ok(Token::Let)) {
            starts.push((start, lexer.extras.line));
        }
    }

    starts.iter()
          .enumerate()
          .map(|(index, &(start, line))| {
              let end = starts.get(index + 1).map_or(source.len(), |&(next, _)| next);
              Block { text: &source[start..end],
                      line }
          })
          .collect()
}

/// Parses and evaluates a single block of text.
///
/// This is the core entry point: the text must hold exactly one
/// `let ... in ... end;` block and nothing else.
///
/// # Errors
/// Returns the first lexical, syntactic or evaluation failure in the block.
///
/// # Example
/// ```
/// use letcalc::{
///     interpreter::{evaluator::core::Options, program::evaluate_block},
///     Number,
/// };
///
/// let options = Options::default();
/// assert_eq!(evaluate_block("let x = 2; in x + 3 end;", &options).unwrap(),
///            Number::Integer(5));
/// assert!(evaluate_block("let x = 0; in 10 / x end;", &options).is_err());
/// ```
pub fn evaluate_block(text: &str, options: &Options) -> Evaluated {
    Parser::new(text, *options).parse_block()
}

/// Evaluates every block of a program, in order.
///
/// Each block gets its own parser and bindings, so a failure or a binding in
/// one block never affects another.
pub fn run_program(source: &str, options: &Options) -> Vec<Evaluated> {
    split_blocks(source).into_iter()
                        .enumerate()
                        .map(|(index, block)| {
                            let outcome =
                                Parser::with_line(block.text, block.line, *options).parse_block();
                            match &outcome {
                                Ok(value) => {
                                    debug!("block {} (line {}): {value}", index + 1, block.line);
                                },
                                Err(e) => {
                                    debug!("block {} (line {}) failed: {e}", index + 1, block.line);
                                },
                            }
                            outcome
                        })
                        .collect()
}

/// Renders a block outcome the way it is printed: the number, or `Error`.
///
/// # Example
/// ```
/// use letcalc::{
///     error::{BlockError, RuntimeError},
///     interpreter::program::render_outcome,
///     Number,
/// };
///
/// assert_eq!(render_outcome(&Ok(Number::Integer(5))), "5");
/// assert_eq!(render_outcome(&Ok(Number::Real(5.0))), "5.0");
/// assert_eq!(render_outcome(&Err(BlockError::from(RuntimeError::DivisionByZero { line: 1 }))),
///            "Error");
/// ```
#[must_use]
pub fn render_outcome(outcome: &Evaluated) -> String {
    match outcome {
        Ok(value) => value.to_string(),
        Err(_) => ERROR_MARKER.to_string(),
    }
}
