//! Parse error types.
//!
//! The parser is fail-fast: the first grammar violation aborts the parse
//! and is returned as the single [`ParseError`]. The error records the
//! offending token so the driver can point at it.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Token, TokenKind};
use thiserror::Error;

/// A syntax error at one token.
///
/// Display form: `<lexeme> <kind> <line> at '<message>'`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{lexeme} {token_kind} {line} at '{kind}'")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Lexeme of the offending token (empty at end of input).
    pub lexeme: String,
    pub token_kind: TokenKind,
    pub line: u32,
}

/// What the parser expected but did not find.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// A specific token was required, e.g. the `)` closing a grouping.
    #[error("{message}")]
    ExpectedToken {
        expected: TokenKind,
        message: &'static str,
    },
    /// No expression can start with the current token.
    #[error("Expect expression.")]
    ExpectedExpression,
    /// A complete expression was parsed but input remains.
    #[error("Expect end of expression.")]
    TrailingTokens,
}

impl ParseError {
    /// Create an error pointing at `token`.
    #[cold]
    pub fn at(token: &Token, kind: ParseErrorKind) -> Self {
        ParseError {
            kind,
            lexeme: token.lexeme.clone(),
            token_kind: token.kind,
            line: token.line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::ExpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::TrailingTokens => ErrorCode::E1003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let found = if self.token_kind == TokenKind::Eof {
            "found end of input".to_owned()
        } else {
            format!("found `{}`", self.lexeme)
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_line(self.line)
            .with_note(found);
        match &self.kind {
            ParseErrorKind::ExpectedToken { expected, .. } => {
                diag.with_note(format!("expected {expected}"))
            }
            ParseErrorKind::ExpectedExpression => {
                diag.with_note("an expression starts with a number, string, `true`, `false`, `nil`, `(`, `-` or `!`")
            }
            ParseErrorKind::TrailingTokens => {
                diag.with_note("only one expression is allowed per input")
            }
        }
    }
}

#[cfg(test)]
mod tests;
