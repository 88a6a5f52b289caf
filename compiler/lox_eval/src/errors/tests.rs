use super::*;
use lox_ir::TokenKind;
use pretty_assertions::assert_eq;

fn minus(line: u32) -> Token {
    Token::new(TokenKind::Minus, "-", None, line)
}

#[test]
fn display_form() {
    let err = EvalError::at(&minus(2), operand_not_number(&Value::Str("a".into())));
    assert_eq!(err.to_string(), "operand must be a number at '-' [line 2]");
}

#[test]
fn kind_messages() {
    let nil = Value::Nil;
    let one = Value::Number(1.0);
    assert_eq!(
        operands_not_numbers(&nil, &one).to_string(),
        "operands must be numbers"
    );
    assert_eq!(
        invalid_add_operands(&one, &nil).to_string(),
        "operands must be two numbers or two strings"
    );
}

#[test]
fn codes_and_diagnostics() {
    let err = EvalError::at(
        &minus(1),
        invalid_add_operands(&Value::Number(1.0), &Value::Str("b".into())),
    );
    assert_eq!(err.code(), ErrorCode::E6003);
    let diag = err.to_diagnostic();
    assert_eq!(diag.line, Some(1));
    assert_eq!(diag.notes, vec!["found number and string".to_owned()]);

    let err = EvalError::at(&minus(1), operand_not_number(&Value::Nil));
    assert_eq!(err.code(), ErrorCode::E6001);
    assert_eq!(err.to_diagnostic().notes, vec!["found nil".to_owned()]);

    let err = EvalError::at(&minus(1), operands_not_numbers(&Value::Nil, &Value::Nil));
    assert_eq!(err.code(), ErrorCode::E6002);
}
