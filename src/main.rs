use std::fs;

use clap::Parser;
use letcalc::{
    Options, get_result,
    interpreter::evaluator::core::{COMPARISON_EPSILON, MAX_NESTING_DEPTH},
};

/// letcalc evaluates blocks of `let ... in ... end;` arithmetic and prints
/// one result per block.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells letcalc to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// How deeply parentheses, negations, casts and `if`s may nest.
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Absolute tolerance used by `==` and `<>` when comparing reals.
    #[arg(long, default_value_t = COMPARISON_EPSILON)]
    epsilon: f64,

    contents: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let options = Options { max_depth: args.max_depth,
                            epsilon:   args.epsilon, };

    for line in get_result(&script, &options) {
        println!("{line}");
    }
}
