use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so
    /// `a - b - c` parses as `(a - b) - c`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree, or `None` when tolerant parsing found no
    /// operand at all.
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Option<Expr>> {
        let mut left = self.parse_multiplicative()?;
        loop {
            if let Some(op) = token_to_binary_operator(self.peek())
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                self.advance();
                let right = self.parse_multiplicative()?;
                left = Some(Expr::binary(op, left, right));
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`. These bind tighter
    /// than `+` and `-`, so their nodes always end up below additive nodes.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Option<Expr>> {
        let mut left = self.parse_unary()?;
        loop {
            if let Some(op) = token_to_binary_operator(self.peek())
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                self.advance();
                let right = self.parse_unary()?;
                left = Some(Expr::binary(op, left, right));
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use calctree::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
