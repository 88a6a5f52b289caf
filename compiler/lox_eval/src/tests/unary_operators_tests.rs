//! Tests for unary operator implementations.

use crate::errors::EvalErrorKind;
use crate::unary_operators::evaluate_unary;
use crate::Value;
use lox_ir::UnaryOp;
use pretty_assertions::assert_eq;

#[test]
fn negation() {
    assert_eq!(
        evaluate_unary(Value::Number(3.0), UnaryOp::Neg),
        Ok(Value::Number(-3.0))
    );
    assert_eq!(
        evaluate_unary(Value::Number(-0.5), UnaryOp::Neg),
        Ok(Value::Number(0.5))
    );
}

#[test]
fn negation_requires_a_number() {
    assert_eq!(
        evaluate_unary(Value::Bool(true), UnaryOp::Neg),
        Err(EvalErrorKind::OperandNotNumber { found: "boolean" })
    );
    assert_eq!(
        evaluate_unary(Value::Str("1".into()), UnaryOp::Neg),
        Err(EvalErrorKind::OperandNotNumber { found: "string" })
    );
}

#[test]
fn not_negates_truthiness() {
    let cases = [
        (Value::Nil, true),
        (Value::Bool(false), true),
        (Value::Bool(true), false),
        (Value::Number(0.0), false),
        (Value::Str(String::new()), false),
    ];
    for (value, expected) in cases {
        assert_eq!(
            evaluate_unary(value.clone(), UnaryOp::Not),
            Ok(Value::Bool(expected)),
            "{value:?}"
        );
    }
}
