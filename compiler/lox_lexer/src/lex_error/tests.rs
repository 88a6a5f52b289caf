use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_form() {
    let err = LexError::new(LexErrorKind::UnterminatedString, 3);
    assert_eq!(err.to_string(), "Line: 3, unterminated string");

    let err = LexError::new(LexErrorKind::UnexpectedCharacter('@'), 1);
    assert_eq!(err.to_string(), "Line: 1, unexpected character '@'");
}

#[test]
fn codes() {
    assert_eq!(
        LexError::new(LexErrorKind::UnterminatedString, 1).code(),
        ErrorCode::E0001
    );
    assert_eq!(
        LexError::new(LexErrorKind::UnexpectedCharacter('#'), 1).code(),
        ErrorCode::E0002
    );
}

#[test]
fn diagnostic_carries_message_and_line() {
    let diag = LexError::new(LexErrorKind::UnterminatedString, 5).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.message, "Line: 5, unterminated string");
    assert_eq!(diag.line, Some(5));
    assert_eq!(diag.notes.len(), 1);
}
