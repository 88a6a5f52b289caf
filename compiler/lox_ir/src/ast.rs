//! Expression tree.
//!
//! A closed set of four node variants. Each node owns its children, so a
//! parsed expression is a plain tree: no sharing, no cycles.
//!
//! Dropping a tree is iterative, so arbitrarily deep input is released
//! without recursing once per level.
//!
//! Operator nodes keep both the decoded operator (`BinaryOp`/`UnaryOp`) for
//! exhaustive dispatch and the source token for rendering and error lines.

use std::mem;

use crate::token::{Literal, Token};

/// Binary operators, grouped by the grammar level that produces them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Equality
    Eq,
    NotEq,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Term
    Add,
    Sub,
    Or,

    // Factor
    Mul,
    Div,
    And,
}

impl BinaryOp {
    /// Returns the source-level spelling of this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Or => "or",
            Self::Mul => "*",
            Self::Div => "/",
            Self::And => "and",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }
}

/// An expression node.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Literal(Literal),
    Unary {
        op: UnaryOp,
        token: Token,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        token: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Grouping(Box<Expr>),
}

impl Expr {
    pub fn literal(value: Literal) -> Self {
        Expr::Literal(value)
    }

    pub fn unary(op: UnaryOp, token: Token, operand: Expr) -> Self {
        Expr::Unary {
            op,
            token,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, token: Token, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            token,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

/// Move the non-leaf children of `expr` onto `pending`, leaving `nil`
/// literals in their place.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Literal(_) => {}
        Expr::Unary { operand, .. } => detach(operand, pending),
        Expr::Binary { left, right, .. } => {
            detach(left, pending);
            detach(right, pending);
        }
        Expr::Grouping(inner) => detach(inner, pending),
    }
}

fn detach(child: &mut Expr, pending: &mut Vec<Expr>) {
    if !matches!(child, Expr::Literal(_)) {
        pending.push(mem::replace(child, Expr::Literal(Literal::Nil)));
    }
}

#[cfg(test)]
mod tests;
