#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting input into tokens.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Unexpected character '{character}' at position {position}")
            },
        }
    }
}

impl std::error::Error for LexError {}
