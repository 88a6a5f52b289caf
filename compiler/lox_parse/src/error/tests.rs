use super::*;
use pretty_assertions::assert_eq;

fn rparen_error(token: &Token) -> ParseError {
    ParseError::at(
        token,
        ParseErrorKind::ExpectedToken {
            expected: TokenKind::RightParen,
            message: "Expect ')' after expression.",
        },
    )
}

#[test]
fn display_form() {
    let err = rparen_error(&Token::eof(1));
    assert_eq!(err.to_string(), " EOF 1 at 'Expect ')' after expression.'");

    let token = Token::new(TokenKind::Plus, "+", None, 3);
    let err = ParseError::at(&token, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.to_string(), "+ PLUS 3 at 'Expect expression.'");
}

#[test]
fn codes() {
    let token = Token::eof(1);
    assert_eq!(rparen_error(&token).code(), ErrorCode::E1001);
    assert_eq!(
        ParseError::at(&token, ParseErrorKind::ExpectedExpression).code(),
        ErrorCode::E1002
    );
    assert_eq!(
        ParseError::at(&token, ParseErrorKind::TrailingTokens).code(),
        ErrorCode::E1003
    );
}

#[test]
fn diagnostic_notes() {
    let diag = rparen_error(&Token::eof(2)).to_diagnostic();
    assert_eq!(diag.line, Some(2));
    assert_eq!(
        diag.notes,
        vec![
            "found end of input".to_owned(),
            "expected RIGHT_PAREN".to_owned(),
        ]
    );

    let token = Token::new(TokenKind::Number, "2", None, 1);
    let diag = ParseError::at(&token, ParseErrorKind::TrailingTokens).to_diagnostic();
    assert_eq!(diag.notes[0], "found `2`");
}
