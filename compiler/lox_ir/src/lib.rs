//! Lox IR - the contract shared by every front-end phase.
//!
//! This crate contains the data that flows between the pipeline stages:
//! - Tokens produced by the scanner (`TokenKind`, `Token`, `Literal`)
//! - The expression tree built by the parser (`Expr`, `BinaryOp`, `UnaryOp`)
//! - The diagnostic printer that renders a tree in prefix form
//!
//! # Design Philosophy
//!
//! - **Closed sets**: token kinds, operators and expression variants are
//!   fieldless or tagged enums, matched exhaustively at every use site.
//! - **Immutable once built**: tokens and trees are never mutated after
//!   construction; each node owns its children.

pub mod ast;
pub mod printer;
pub mod token;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use printer::{render, Printer};
pub use token::{Literal, Token, TokenKind};
