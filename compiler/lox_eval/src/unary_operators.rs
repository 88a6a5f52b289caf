//! Unary operator implementations for the evaluator.

use lox_ir::UnaryOp;

use crate::errors::{operand_not_number, OpResult};
use crate::Value;

/// Apply a unary operator to an evaluated operand.
///
/// `-` requires a number; `!` accepts any value and negates its
/// truthiness.
#[expect(
    clippy::needless_pass_by_value,
    reason = "mirrors evaluate_binary, which consumes its operands"
)]
pub fn evaluate_unary(value: Value, op: UnaryOp) -> OpResult {
    match (&value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (_, UnaryOp::Neg) => Err(operand_not_number(&value)),
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
    }
}
