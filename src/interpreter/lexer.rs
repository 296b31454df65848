use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Every variant except [`TokenKind::EndOfInput`] is recognized by the
/// generated lexer; `EndOfInput` is appended by [`tokenize`] once the input
/// is exhausted.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// A run of ASCII digits, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// One of `+ - * / % ^`.
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("^")]
    Operator,
    /// `!`
    #[token("!")]
    Factorial,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `=`
    #[token("=")]
    Assign,
    /// The reserved word `render`.
    #[token("render")]
    RenderKeyword,
    /// Marks the end of the token sequence.
    EndOfInput,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// A token together with the exact text it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The source text of the token. Empty for [`TokenKind::EndOfInput`].
    pub literal:  String,
    /// Byte offset of the token in the input.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, literal: &str, position: usize) -> Self {
        Self { kind,
               literal: literal.to_string(),
               position }
    }

    /// Returns `true` if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Operator => "Operator",
            Self::Factorial => "Factorial",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::Identifier => "Identifier",
            Self::Assign => "Assign",
            Self::RenderKeyword => "RenderKeyword",
            Self::EndOfInput => "EndOfInput",
            Self::Ignored => "Ignored",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::EndOfInput {
            write!(f, "end of input")
        } else {
            write!(f, "{} '{}'", self.kind, self.literal)
        }
    }
}

/// Splits `source` into tokens.
///
/// The returned sequence always ends with exactly one
/// [`TokenKind::EndOfInput`] token. Whitespace is skipped. A character that
/// does not start any token aborts the whole call.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] naming the first unrecognized
/// character and its byte offset.
///
/// # Example
/// ```
/// use calclang::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x = 2 ^ 3").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Number,
///             TokenKind::Operator,
///             TokenKind::Number,
///             TokenKind::EndOfInput]);
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(kind) = kind {
            tokens.push(Token::new(kind, lexer.slice(), position));
        } else {
            let character = source.get(position..)
                                  .and_then(|rest| rest.chars().next())
                                  .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(LexError::UnexpectedCharacter { character, position });
        }
    }

    tokens.push(Token::new(TokenKind::EndOfInput, "", source.len()));
    Ok(tokens)
}
