use crate::error::LexError;

/// Represents all errors that can occur during parsing.
///
/// Only strict parsing reports these. Tolerant parsing turns a missing
/// operand or an unclosed parenthesis into an absent subtree instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The lexer could not produce a token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Found a token that cannot start or continue an expression here.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Input ended where an operand was expected.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset where the input ended.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
}

impl ParseError {
    /// Returns `true` when the error originated in the lexer.
    #[must_use]
    pub const fn is_lex_error(&self) -> bool {
        matches!(self, Self::Lex(_))
    }

    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(error) => error.position(),
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }
}
