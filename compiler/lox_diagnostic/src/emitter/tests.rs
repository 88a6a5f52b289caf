use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn render(diags: &[Diagnostic], summary: usize) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_all(diags);
    emitter.emit_summary(summary);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

#[test]
fn plain_header_line_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_message("operands must be two numbers or two strings at '+' [line 2]")
        .with_line(2)
        .with_note("no implicit conversion between numbers and strings");

    assert_eq!(
        render(&[diag], 0),
        "error[E6003]: operands must be two numbers or two strings at '+' [line 2]\n\
         \x20 --> line 2\n\
         \x20 = note: no implicit conversion between numbers and strings\n"
    );
}

#[test]
fn summary_pluralizes() {
    assert_eq!(render(&[], 1), "error: aborting due to 1 previous error\n");
    assert_eq!(render(&[], 3), "error: aborting due to 3 previous errors\n");
    assert_eq!(render(&[], 0), "");
}

#[test]
fn colors_wrap_severity_and_code() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&Diagnostic::error(ErrorCode::E0002).with_message("x"));
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m\x1b[1m[E0002]\x1b[0m: x"));
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
