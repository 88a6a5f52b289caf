//! Lexical error types.
//!
//! Lexical errors never stop the scan. Each one records what went wrong
//! and the line it was found on; the scanner keeps going and returns every
//! error alongside the complete token sequence.

use lox_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// A lexical error.
///
/// Display form: `Line: <line>, <message>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("Line: {line}, {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line where the error was detected.
    pub line: u32,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// End of input reached inside a string literal.
    #[error("unterminated string")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32) -> Self {
        LexError { kind, line }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_line(self.line);
        match self.kind {
            LexErrorKind::UnterminatedString => {
                diag.with_note("add a closing `\"`; strings may span several lines")
            }
            LexErrorKind::UnexpectedCharacter(_) => diag,
        }
    }
}

#[cfg(test)]
mod tests;
