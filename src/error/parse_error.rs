#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
///
/// Positions are byte offsets into the input line.
pub enum ParseError {
    /// The input contained nothing but whitespace.
    EmptyExpression,
    /// Found a token that cannot start or continue an expression here.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input where an operand was required.
    UnexpectedEndOfInput {
        /// Where the input ended.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Where the `)` should have been.
        position: usize,
    },
    /// A `)` appeared with no matching `(`.
    UnexpectedClosingParen {
        /// Where the stray `)` is.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// An integer literal does not fit in a 32-bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Empty expression"),

            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token {token} at position {position}")
            },

            Self::UnexpectedEndOfInput { position } => write!(f,
                                                              "Unexpected end of input at position {position}: expected a number, variable or '('"),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Expected closing parenthesis ')' at position {position}"),

            Self::UnexpectedClosingParen { position } => {
                write!(f, "Unexpected closing parenthesis at position {position}")
            },

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Unexpected token at end of expression: {token} at position {position}"),

            Self::LiteralTooLarge { literal, position } => write!(f,
                                                                  "Integer literal {literal} at position {position} is too large"),
        }
    }
}

impl std::error::Error for ParseError {}
