//! Primary expressions: literals and parenthesized groupings.

use lox_ir::{Expr, Literal, TokenKind};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        trace!(kind = ?token.kind, line = token.line, "primary");
        let literal = match token.kind {
            TokenKind::Number | TokenKind::String => match &token.literal {
                Some(value) => value.clone(),
                // Hand-built tokens may omit the decoded value.
                None => return Err(self.error_at_current(ParseErrorKind::ExpectedExpression)),
            },
            TokenKind::True => Literal::Bool(true),
            TokenKind::False => Literal::Bool(false),
            TokenKind::Nil => Literal::Nil,
            TokenKind::LeftParen => return self.parse_grouping(),
            _ => return Err(self.error_at_current(ParseErrorKind::ExpectedExpression)),
        };
        self.advance();
        Ok(Expr::literal(literal))
    }

    /// `"(" expression ")"`
    fn parse_grouping(&mut self) -> Result<Expr, ParseError> {
        self.advance();
        let inner = self.parse_expr()?;
        self.expect(TokenKind::RightParen, "Expect ')' after expression.")?;
        Ok(Expr::grouping(inner))
    }
}
