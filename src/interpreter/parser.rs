/// Entry points of the parser.
///
/// Holds the public `parse` function, the expression entry rule and the
/// end-of-input check shared by every root form.
pub mod core;

/// Root-level parsing.
///
/// Recognizes the forms that may only appear at the start of a line: the
/// `render` keyword and variable assignment.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the precedence levels for `+ -`, `* / %` and the
/// right-associative `^`.
pub mod binary;

/// Primary expression parsing.
///
/// Handles numbers, variables, parenthesized groups, prefix factorial and
/// unary minus.
pub mod unary;
