/// The evaluator module computes results from AST nodes.
///
/// The evaluator walks the AST, performs the integer arithmetic, and reads and
/// writes the session's variables.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Owns the variable environment of a session.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw input line and produces a sequence of tokens, each
/// carrying its kind, its exact text and its position. This is the first stage
/// of interpretation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent parser with one function per precedence
/// level. It produces exactly one root per line and fails fast on the first
/// grammar violation.
pub mod parser;
/// Draws an AST as a text tree.
pub mod render;
/// The interpreter session that ties all stages together.
///
/// Exposes the single text-in, text-out entry point used by the REPL and by
/// any other embedding.
pub mod session;
