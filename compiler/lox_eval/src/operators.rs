//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch. Both operands are already evaluated, left
//! first, before any type check runs; `or` and `and` therefore never
//! short-circuit.

use lox_ir::BinaryOp;

use crate::errors::{invalid_add_operands, operands_not_numbers, EvalErrorKind, OpResult};
use crate::Value;

/// Apply a binary operator to two evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> OpResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        BinaryOp::And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub => numbers(&left, &right).map(|(a, b)| Value::Number(a - b)),
        BinaryOp::Mul => numbers(&left, &right).map(|(a, b)| Value::Number(a * b)),
        // IEEE division: `1 / 0` is `inf`, `0 / 0` is `NaN`.
        BinaryOp::Div => numbers(&left, &right).map(|(a, b)| Value::Number(a / b)),
        BinaryOp::Lt => numbers(&left, &right).map(|(a, b)| Value::Bool(a < b)),
        BinaryOp::LtEq => numbers(&left, &right).map(|(a, b)| Value::Bool(a <= b)),
        BinaryOp::Gt => numbers(&left, &right).map(|(a, b)| Value::Bool(a > b)),
        BinaryOp::GtEq => numbers(&left, &right).map(|(a, b)| Value::Bool(a >= b)),
    }
}

/// `+` adds two numbers or concatenates two strings.
fn eval_add(left: Value, right: Value) -> OpResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (left, right) => Err(invalid_add_operands(&left, &right)),
    }
}

#[inline]
fn numbers(left: &Value, right: &Value) -> Result<(f64, f64), EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operands_not_numbers(left, right)),
    }
}
