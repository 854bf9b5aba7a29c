/// Lexical errors.
///
/// Raised by the lexer when a character cannot start any token, or when a
/// run of digits and decimal points cannot be read as a number.
pub mod lex_error;
/// Parsing errors.
///
/// Defines every grammar violation the parser reports in strict mode: missing
/// operands, unmatched parentheses, stray tokens and leftover input after a
/// complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while reducing a tree to a number, such as
/// division by zero or an attempt to evaluate a subtree that was never parsed.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure raised while turning source text into a number.
///
/// Returned by [`crate::evaluate_expression`]. Parse failures and runtime
/// failures stay distinct so callers can tell a malformed expression from one
/// that is well formed but cannot be computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text could not be tokenized or did not follow the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree was built but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Parse(ParseError::Lex(error))
    }
}

impl Error {
    /// Returns `true` when the failure is a grammar violation.
    ///
    /// Lexical errors are reported separately by [`Error::is_lex_error`].
    ///
    /// # Example
    /// ```
    /// use calctree::evaluate_expression;
    ///
    /// let error = evaluate_expression("(1 + 2").unwrap_err();
    /// assert!(error.is_syntax_error());
    /// ```
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Parse(error) if !error.is_lex_error())
    }

    /// Returns `true` when the text contained an unreadable character or
    /// number.
    #[must_use]
    pub const fn is_lex_error(&self) -> bool {
        matches!(self, Self::Parse(error) if error.is_lex_error())
    }

    /// Returns `true` when evaluation failed because a divisor was zero.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::Runtime(RuntimeError::DivisionByZero))
    }
}
