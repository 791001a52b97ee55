/// The evaluator module computes numeric results.
///
/// The parser calls into the evaluator as soon as the operands of an
/// operation are known. It performs arithmetic with integer-to-real
/// promotion, comparisons, casts, and holds the per-block bindings.
///
/// # Responsibilities
/// - Evaluates `+ - * /`, negation, casts and comparisons.
/// - Reports division by zero, overflow and unknown variables.
/// - Provides the block-scoped binding environment.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces tokens on
/// demand, each corresponding to a number, identifier, keyword, operator or
/// delimiter.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with a source line.
/// - Distinguishes integer from real literals.
/// - Reports invalid characters and malformed literals as invalid lexemes.
pub mod lexer;
/// Operator definitions shared by the parser and the evaluator.
pub mod operator;
/// The parser module recognizes blocks and evaluates them on the fly.
///
/// A recursive-descent parser with one token of lookahead. No syntax tree is
/// built: each rule returns its value directly.
///
/// # Responsibilities
/// - Validates the grammar of blocks, declarations and expressions.
/// - Keeps parsing after a failure and reports the first one.
/// - Enforces the nesting limit.
pub mod parser;
/// Splitting a program into blocks and running them one by one.
pub mod program;
/// The value module defines the runtime numeric type.
///
/// # Responsibilities
/// - Defines the `Number` enum with its integer and real variants.
/// - Provides safe promotion and casts between the two.
pub mod value;
