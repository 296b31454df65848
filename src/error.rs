/// Lexing errors.
///
/// Raised when the input contains a character that does not begin any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Parse errors include unexpected tokens, unbalanced parentheses,
/// missing operands and oversized literals.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing a result, such
/// as division by zero, out of range factorials and undefined variables.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure produced by a single call to the interpreter.
///
/// Each variant wraps the error of one stage, so `?` can lift stage errors
/// directly into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid expression.
    Parse(ParseError),
    /// The expression failed while being evaluated.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}
