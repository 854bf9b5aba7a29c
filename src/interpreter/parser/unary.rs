use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Negation binds tighter than any binary operator and may nest, so
    /// `--2` is `-(-2)` and `2 * -3` is `2 * (-3)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := "-" unary
    ///            | primary
    /// ```
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Option<Expr>> {
        if matches!(self.peek(), Token::Minus) {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Some(Expr::unary(UnaryOperator::Negate, operand)));
        }
        self.parse_primary()
    }

    /// Parses a primary (atomic) expression: a number or a parenthesized
    /// group.
    ///
    /// Grammar:
    /// ```text
    ///     primary := number
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Returns
    /// The parsed node. In tolerant mode any other token, including end of
    /// input and unreadable text, yields `None` and is left unconsumed.
    ///
    /// # Errors
    /// In strict mode, `UnexpectedEndOfInput`, `UnexpectedToken` or the
    /// lexical error behind the current token.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Option<Expr>> {
        match self.peek() {
            Token::Number(value) => {
                self.advance();
                Ok(Some(Expr::Number(value)))
            },
            Token::LParen => self.parse_grouping(),
            _ if self.is_tolerant() => Ok(None),
            _ => Err(self.unexpected()),
        }
    }

    /// Parses `"(" expression ")"`.
    ///
    /// A tolerant parser that runs out of input before the `)` returns the
    /// inner expression as it stands.
    fn parse_grouping(&mut self) -> ParseResult<Option<Expr>> {
        let position = self.position();
        self.advance();

        let expr = self.parse_expression()?;
        match self.peek() {
            Token::RParen => {
                self.advance();
                Ok(expr)
            },
            _ if self.is_tolerant() => Ok(expr),
            Token::Error => Err(self.unexpected()),
            _ => Err(ParseError::ExpectedClosingParen { position }),
        }
    }
}
