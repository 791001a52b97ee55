//! # letcalc
//!
//! letcalc is an interpreter for a small arithmetic language written in Rust.
//! A program is a sequence of independent blocks such as
//!
//! ```text
//! let x = 2; y : real = x / 4; in x + y end;
//! ```
//!
//! Each block is tokenized, parsed by recursive descent and evaluated during
//! the parse. A block yields either an integer or real number, or fails and
//! is reported as `Error`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a block. Every error carries the source line it refers to.
/// Callers that only care whether a block failed can treat them as opaque.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Distinguishes syntactic failures from evaluation failures.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation, and exposes the entry points for running blocks and whole
/// programs.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Reject non-finite real results.
pub mod util;

pub use interpreter::{
    evaluator::core::Options,
    program::{evaluate_block, render_outcome, run_program, split_blocks},
    value::Number,
};

/// Runs a whole program and returns one output line per block.
///
/// Each line is either the block's value or `Error`.
///
/// # Examples
/// ```
/// use letcalc::{Options, get_result};
///
/// let source = "let x = 2.5; in x * 2 end;\nlet y = x; in y end;";
/// assert_eq!(get_result(source, &Options::default()), vec!["5.0", "Error"]);
/// ```
#[must_use]
pub fn get_result(source: &str, options: &Options) -> Vec<String> {
    run_program(source, options).iter()
                                .map(render_outcome)
                                .collect()
}
