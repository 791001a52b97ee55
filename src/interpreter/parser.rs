/// The parser state and shared parsing primitives.
///
/// Holds the token cursor, `expect`, nesting control and the expression entry
/// point.
pub mod core;

/// Unary and primary expressions.
///
/// Literals, identifiers, parentheses, negation, casts and `if` expressions.
pub mod unary;

/// Binary operators.
///
/// Additive and multiplicative chains, and the comparison in `if`
/// conditions.
pub mod binary;

/// Blocks and declarations.
///
/// Parses `let ... in ... end;` and evaluates each declaration into the
/// block's bindings.
pub mod block;

/// Parsing helpers.
///
/// Identifiers, type annotations, and combining the outcomes of sub-rules.
pub mod utils;
