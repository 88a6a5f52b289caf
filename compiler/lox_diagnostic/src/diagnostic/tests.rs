use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("Expect expression.")
        .with_line(3)
        .with_note("expressions start with a literal, `(`, `-` or `!`");

    assert!(diag.is_error());
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.message, "Expect expression.");
    assert_eq!(diag.line, Some(3));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn display_is_single_line_header() {
    let diag = Diagnostic::error(ErrorCode::E0001).with_message("Line: 1, unterminated string");
    assert_eq!(diag.to_string(), "error[E0001]: Line: 1, unterminated string");
}
