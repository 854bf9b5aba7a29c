use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Represents a lexical token in an arithmetic expression.
///
/// A token is a minimal but meaningful unit of text produced by the
/// [`Lexer`]. Only [`Token::Number`] carries a payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5` or `2.`.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// The input is exhausted, or the lexer's token budget is spent.
    EndOfInput,
    /// Text that does not form a token.
    Error,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
            Self::Error => write!(f, "invalid input"),
        }
    }
}

/// Tokens as recognized by the generated state machine, before the budget
/// and error bookkeeping of [`Lexer`] is applied.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f\x0B]+")]
enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]*", parse_number)]
    Number(f64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Number(value) => Self::Number(value),
            RawToken::Plus => Self::Plus,
            RawToken::Minus => Self::Minus,
            RawToken::Star => Self::Star,
            RawToken::Slash => Self::Slash,
            RawToken::LParen => Self::LParen,
            RawToken::RParen => Self::RParen,
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// A lone `.` matches the number pattern but is not a number, so it yields
/// `None` and surfaces as [`LexError::MalformedNumber`].
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts source text into a lazy sequence of [`Token`]s.
///
/// The lexer borrows its source and produces one token per call to
/// [`Lexer::next_token`]. Once [`Token::EndOfInput`] has been returned, every
/// later call returns it again.
///
/// A lexer may be bounded by a token budget. After that many tokens have been
/// produced it reports [`Token::EndOfInput`] even when text remains, which is
/// how the staged builder parses a prefix of an expression.
pub struct Lexer<'src> {
    inner:       logos::Lexer<'src, RawToken>,
    budget:      Option<usize>,
    emitted:     usize,
    token_start: usize,
    finished:    bool,
    last_error:  Option<LexError>,
}

impl<'src> Lexer<'src> {
    /// Creates an unbounded lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_budget(source, None)
    }

    /// Creates a lexer that stops after producing `max_tokens` tokens.
    ///
    /// # Example
    /// ```
    /// use calctree::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::bounded("1 + 2", 2);
    /// assert_eq!(lexer.next_token(), Token::Number(1.0));
    /// assert_eq!(lexer.next_token(), Token::Plus);
    /// assert_eq!(lexer.next_token(), Token::EndOfInput);
    /// ```
    #[must_use]
    pub fn bounded(source: &'src str, max_tokens: usize) -> Self {
        Self::with_budget(source, Some(max_tokens))
    }

    /// Creates a lexer with an optional token budget.
    #[must_use]
    pub fn with_budget(source: &'src str, budget: Option<usize>) -> Self {
        Self { inner: RawToken::lexer(source),
               budget,
               emitted: 0,
               token_start: 0,
               finished: false,
               last_error: None }
    }

    /// Produces the next token.
    ///
    /// Whitespace is skipped. Unreadable text yields [`Token::Error`]; the
    /// matching [`LexError`] can be retrieved with [`Lexer::take_error`].
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::EndOfInput;
        }

        if self.budget.is_some_and(|max| self.emitted >= max) {
            self.finish(self.inner.span().end);
            return Token::EndOfInput;
        }

        let token = match self.inner.next() {
            None => {
                self.finish(self.inner.source().len());
                return Token::EndOfInput;
            },
            Some(Ok(raw)) => Token::from(raw),
            Some(Err(())) => {
                self.last_error = Some(self.classify_error());
                Token::Error
            },
        };

        self.emitted += 1;
        self.token_start = self.inner.span().start;
        trace!(?token, position = self.token_start, "lexed token");

        token
    }

    /// Byte offset where the most recently produced token starts.
    ///
    /// After [`Token::EndOfInput`] this is the offset where lexing stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.token_start
    }

    /// Number of tokens produced so far, not counting end of input.
    #[must_use]
    pub const fn tokens_emitted(&self) -> usize {
        self.emitted
    }

    /// The text being tokenized.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }

    /// Removes and returns the error behind the latest [`Token::Error`].
    pub fn take_error(&mut self) -> Option<LexError> {
        self.last_error.take()
    }

    fn finish(&mut self, position: usize) {
        self.finished = true;
        self.token_start = position;
    }

    fn classify_error(&self) -> LexError {
        let text = self.inner.slice();
        let position = self.inner.span().start;

        match text.chars().next() {
            Some(c) if c == '.' || c.is_ascii_digit() => {
                LexError::MalformedNumber { text: text.to_string(),
                                            position }
            },
            Some(character) => LexError::UnrecognizedCharacter { character, position },
            None => LexError::UnrecognizedCharacter { character: char::REPLACEMENT_CHARACTER,
                                                      position },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens until end of input. [`Token::Error`] is yielded like any
    /// other token.
    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EndOfInput => None,
            token => Some(token),
        }
    }
}

/// Counts the tokens in `source`, including [`Token::Error`] tokens.
///
/// # Example
/// ```
/// use calctree::interpreter::lexer::count_tokens;
///
/// assert_eq!(count_tokens("1 + 2 * 3"), 5);
/// assert_eq!(count_tokens("   "), 0);
/// ```
#[must_use]
pub fn count_tokens(source: &str) -> usize {
    Lexer::new(source).count()
}
