use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexer, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Decides what the parser does when the input breaks off mid-expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Every grammar violation is a [`ParseError`].
    #[default]
    Strict,
    /// A missing operand becomes an absent subtree, an unclosed parenthesis
    /// keeps its inner expression and leftover tokens are ignored.
    Tolerant,
}

/// Runtime configuration for a [`Parser`].
///
/// # Example
/// ```
/// use calctree::interpreter::parser::core::{ParseMode, ParserOptions};
///
/// let options = ParserOptions::tolerant().with_token_budget(3);
/// assert_eq!(options.mode, ParseMode::Tolerant);
/// assert_eq!(options.token_budget, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Failure policy.
    pub mode:         ParseMode,
    /// Maximum number of tokens the lexer may produce, if any.
    pub token_budget: Option<usize>,
}

impl ParserOptions {
    /// Strict parsing of the whole input.
    #[must_use]
    pub const fn strict() -> Self {
        Self { mode:         ParseMode::Strict,
               token_budget: None, }
    }

    /// Tolerant parsing of the whole input.
    #[must_use]
    pub const fn tolerant() -> Self {
        Self { mode:         ParseMode::Tolerant,
               token_budget: None, }
    }

    /// Limits the lexer to the first `budget` tokens.
    #[must_use]
    pub const fn with_token_budget(mut self, budget: usize) -> Self {
        self.token_budget = Some(budget);
        self
    }
}

/// Recursive-descent parser over a single expression.
///
/// The parser owns its [`Lexer`] and caches exactly one token of lookahead.
/// Grammar, from lowest to highest precedence:
///
/// ```text
///     expression := additive
///     additive   := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := unary (("*" | "/") unary)*
///     unary      := "-" unary | primary
///     primary    := number | "(" expression ")"
/// ```
pub struct Parser<'src> {
    lexer:    Lexer<'src>,
    current:  Token,
    position: usize,
    mode:     ParseMode,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    #[must_use]
    pub fn new(source: &'src str, options: ParserOptions) -> Self {
        let mut lexer = Lexer::with_budget(source, options.token_budget);
        let current = lexer.next_token();
        let position = lexer.position();

        Self { lexer,
               current,
               position,
               mode: options.mode }
    }

    /// The failure policy this parser was built with.
    #[must_use]
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parses one complete expression and consumes the parser.
    ///
    /// In strict mode the input must end right after the expression and the
    /// result is always `Some`. In tolerant mode the result is `None` when no
    /// operand could be parsed at all, and trailing tokens are ignored.
    ///
    /// # Errors
    /// In strict mode, any lexical or grammar error. Tolerant mode does not
    /// fail.
    pub fn parse(mut self) -> ParseResult<Option<Expr>> {
        debug!(source = self.lexer.source(), mode = ?self.mode, "parsing expression");

        let expr = self.parse_expression()?;
        if self.mode == ParseMode::Strict {
            self.expect_end()?;
        }

        debug!(tokens = self.lexer.tokens_emitted(), complete = expr.is_some(), "parsed expression");

        Ok(expr)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for recursive parsing, used again for the
    /// inside of parenthesized groups.
    ///
    /// Grammar: `expression := additive`
    pub fn parse_expression(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_additive()
    }

    pub(in crate::interpreter::parser) const fn peek(&self) -> Token {
        self.current
    }

    pub(in crate::interpreter::parser) const fn position(&self) -> usize {
        self.position
    }

    pub(in crate::interpreter::parser) fn is_tolerant(&self) -> bool {
        self.mode == ParseMode::Tolerant
    }

    /// Moves to the next token and returns the one that was current.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let previous = self.current;
        self.current = self.lexer.next_token();
        self.position = self.lexer.position();
        previous
    }

    /// Builds the error for the current token, which could not be used.
    pub(in crate::interpreter::parser) fn unexpected(&mut self) -> ParseError {
        match self.current {
            Token::EndOfInput => ParseError::UnexpectedEndOfInput { position: self.position },
            Token::Error => self.lexer
                                .take_error()
                                .map_or_else(|| ParseError::UnexpectedToken { token:    Token::Error.to_string(),
                                                                              position: self.position, },
                                             ParseError::Lex),
            token => ParseError::UnexpectedToken { token:    token.to_string(),
                                                   position: self.position, },
        }
    }

    fn expect_end(&mut self) -> ParseResult<()> {
        match self.current {
            Token::EndOfInput => Ok(()),
            Token::Error => Err(self.unexpected()),
            token => Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                                position: self.position, }),
        }
    }
}
