//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`) and binary operator precedence chain
//! - `operators.rs`: Operator matching helpers
//! - `primary.rs`: Literals and groupings
//!
//! Precedence, loosest first: equality, comparison, term (`+ - or`),
//! factor (`* / and`), unary, primary. Every binary level folds to the left.

mod operators;
mod primary;

use lox_ir::Expr;
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested groupings.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_equality())
    }

    /// Parse `==` and `!=`.
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.match_equality_op() {
            let token = self.advance().clone();
            let right = self.parse_comparison()?;
            left = Expr::binary(op, token, left, right);
        }

        Ok(left)
    }

    /// Parse `<`, `<=`, `>` and `>=`.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.match_comparison_op() {
            let token = self.advance().clone();
            let right = self.parse_term()?;
            left = Expr::binary(op, token, left, right);
        }

        Ok(left)
    }

    /// Parse `+`, `-` and `or`.
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_term_op() {
            let token = self.advance().clone();
            let right = self.parse_factor()?;
            left = Expr::binary(op, token, left, right);
        }

        Ok(left)
    }

    /// Parse `*`, `/` and `and`.
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_factor_op() {
            let token = self.advance().clone();
            let right = self.parse_unary()?;
            left = Expr::binary(op, token, left, right);
        }

        Ok(left)
    }

    /// Parse prefix `-` and `!`. Right-associative: `- - x` is `-(-(x))`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_unary_op() {
            let token = self.advance().clone();
            trace!(?op, line = token.line, "unary");
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::unary(op, token, operand));
        }

        self.parse_primary()
    }
}
