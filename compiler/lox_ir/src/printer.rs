//! Prefix-notation printer for expression trees.
//!
//! Renders every node fully parenthesized:
//! - `Binary(op, l, r)` → `(op l r)`
//! - `Unary(op, r)` → `(op r)`
//! - `Grouping(e)` → `(group e)`
//! - `Literal(v)` → the literal's text (`nil` for the absent value)
//!
//! Used for structural assertions in tests and by `lox parse`.

use lox_stack::ensure_sufficient_stack;

use crate::ast::Expr;

/// Render an expression tree in prefix form.
pub fn render(expr: &Expr) -> String {
    Printer::new().print(expr)
}

/// Accumulating prefix printer.
#[derive(Default)]
pub struct Printer {
    out: String,
}

impl Printer {
    pub fn new() -> Self {
        Printer { out: String::new() }
    }

    /// Render `expr`, consuming the printer.
    pub fn print(mut self, expr: &Expr) -> String {
        self.write_expr(expr);
        self.out
    }

    fn write_expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.write_expr_inner(expr));
    }

    fn write_expr_inner(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(value) => {
                use std::fmt::Write;
                // Writing into a String cannot fail.
                let _ = write!(self.out, "{value}");
            }
            Expr::Unary { token, operand, .. } => {
                self.parenthesize(&token.lexeme, &[operand.as_ref()]);
            }
            Expr::Binary {
                token, left, right, ..
            } => {
                self.parenthesize(&token.lexeme, &[left.as_ref(), right.as_ref()]);
            }
            Expr::Grouping(inner) => self.parenthesize("group", &[inner.as_ref()]),
        }
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) {
        self.out.push('(');
        self.out.push_str(name);
        for expr in exprs {
            self.out.push(' ');
            self.write_expr(expr);
        }
        self.out.push(')');
    }
}
