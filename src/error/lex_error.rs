/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Error at position {position}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A run of digits and a decimal point that does not form a number, such
    /// as a lone `.`.
    #[error("Error at position {position}: Malformed number literal '{text}'.")]
    MalformedNumber {
        /// The text of the literal.
        text:     String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { position, .. } | Self::MalformedNumber { position, .. } => {
                *position
            },
        }
    }
}
