//! # calclang
//!
//! calclang is a small integer expression language written in Rust.
//! It tokenizes, parses and evaluates one line at a time, with support for
//! `+ - * / % ^`, prefix factorial, parentheses, variables, and drawing the
//! parse tree of an expression with `render`.

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

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator types that represent
/// one parsed line as a tree. The AST is built by the parser and traversed by
/// the evaluator and the renderer.
pub mod ast;
/// Provides the error types for every stage.
///
/// This module defines the errors that can be raised during lexing, parsing,
/// or evaluating a line, plus the crate-level `Error` that wraps them. Each
/// error renders as a human readable message.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Attaches positions or operands to each failure for context.
/// - Implements the standard error traits so errors compose with `?`.
pub mod error;
/// Orchestrates the entire process of interpreting a line.
///
/// This module ties together lexing, parsing, evaluation and rendering, and
/// exposes the session type used to interpret lines one after another.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and renderer.
/// - Keeps the variables of a session between lines.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Checked numeric conversions.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{lexer::tokenize, parser::core::parse, session::Interpreter},
};
