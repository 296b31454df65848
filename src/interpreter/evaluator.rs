/// Core evaluation logic.
///
/// Defines the variable environment and the dispatch over AST variants.
pub mod core;

/// Unary operator evaluation.
///
/// Handles prefix factorial and its range checks.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators, including the zero-divisor and
/// negative-exponent checks.
pub mod binary;
