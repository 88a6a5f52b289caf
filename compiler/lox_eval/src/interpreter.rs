//! Tree-walking interpreter.
//!
//! Evaluation is fail-fast: the first type error aborts the walk and is
//! returned with the operator token that raised it.

use lox_ir::Expr;
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::EvalError;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

/// Evaluator state.
///
/// Single-use: construct a fresh interpreter for each expression.
#[derive(Debug, Default)]
pub struct Interpreter {
    nodes_evaluated: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::default()
    }

    /// Number of nodes visited so far.
    pub fn nodes_evaluated(&self) -> usize {
        self.nodes_evaluated
    }

    /// Evaluate `expr` to a value.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested trees.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        self.nodes_evaluated += 1;
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, token, operand } => {
                let value = self.evaluate(operand)?;
                trace!(?op, operand = value.type_name(), line = token.line, "unary");
                evaluate_unary(value, *op).map_err(|kind| EvalError::at(token, kind))
            }
            Expr::Binary {
                op,
                token,
                left,
                right,
            } => {
                // Both sides always run, left first.
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                trace!(
                    ?op,
                    left = left.type_name(),
                    right = right.type_name(),
                    line = token.line,
                    "binary"
                );
                evaluate_binary(left, right, *op).map_err(|kind| EvalError::at(token, kind))
            }
        }
    }
}
