//! Recursive descent parser for Lox expressions.
//!
//! Builds one [`Expr`] tree from a scanned token sequence, or reports the
//! first syntax error. The whole input must form a single expression:
//! anything left before the EOF token is an error.

mod cursor;
mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind};

use cursor::Cursor;
use lox_ir::{Expr, Token, TokenKind};
use tracing::debug;

/// Parse `tokens` into one expression tree.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    let result = Parser::new(tokens).parse();
    match &result {
        Ok(_) => debug!(tokens = tokens.len(), "parsed expression"),
        Err(err) => debug!(tokens = tokens.len(), code = %err.code(), "parse failed"),
    }
    result
}

/// Parser state.
///
/// Single-use: construct a fresh parser for each token sequence.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse one expression followed by end of input.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            return Err(self.error_at_current(ParseErrorKind::TrailingTokens));
        }
        Ok(expr)
    }

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    /// Consume a token of the given kind or fail with `message`.
    fn expect(&mut self, kind: TokenKind, message: &'static str) -> Result<&'a Token, ParseError> {
        match self.cursor.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.error_at_current(ParseErrorKind::ExpectedToken {
                expected: kind,
                message,
            })),
        }
    }

    #[cold]
    fn error_at_current(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::at(self.current(), kind)
    }
}

#[cfg(test)]
mod tests;
