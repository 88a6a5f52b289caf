//! Lox Eval - tree-walking evaluator for Lox expressions.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values, with truthiness and
//!   structural equality
//! - [`evaluate_binary`]: direct enum-based binary operator dispatch
//! - [`evaluate_unary`]: direct enum-based unary operator dispatch
//! - [`Interpreter`]: walks the tree, attaching the operator token to any
//!   operator failure

pub mod errors;
mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use errors::{EvalError, EvalErrorKind, OpResult};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::Value;

use lox_ir::Expr;
use tracing::debug;

/// Evaluate one expression with a fresh interpreter.
pub fn evaluate(expr: &Expr) -> Result<Value, EvalError> {
    let mut interpreter = Interpreter::new();
    let result = interpreter.evaluate(expr);
    match &result {
        Ok(value) => debug!(
            nodes = interpreter.nodes_evaluated(),
            kind = value.type_name(),
            "evaluated expression"
        ),
        Err(err) => debug!(
            nodes = interpreter.nodes_evaluated(),
            code = %err.code(),
            "evaluation failed"
        ),
    }
    result
}

/// Evaluate one expression and return the printed form of its value.
pub fn interpret(expr: &Expr) -> Result<String, EvalError> {
    evaluate(expr).map(|value| value.to_string())
}

#[cfg(test)]
mod tests;
