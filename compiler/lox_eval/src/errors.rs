//! Runtime errors and their constructors.
//!
//! Operator implementations return a bare [`EvalErrorKind`]; the
//! interpreter attaches the operator token to produce an [`EvalError`].

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Token;
use thiserror::Error;

use crate::Value;

/// Result of applying one operator.
pub type OpResult = Result<Value, EvalErrorKind>;

/// A runtime error at one operator.
///
/// Display form: `<message> at '<lexeme>' [line <line>]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind} at '{lexeme}' [line {line}]")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Lexeme of the operator that failed.
    pub lexeme: String,
    pub line: u32,
}

/// What went wrong. The operand type names feed diagnostic notes only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum EvalErrorKind {
    #[error("operand must be a number")]
    OperandNotNumber { found: &'static str },
    #[error("operands must be numbers")]
    OperandsNotNumbers {
        left: &'static str,
        right: &'static str,
    },
    #[error("operands must be two numbers or two strings")]
    InvalidAddOperands {
        left: &'static str,
        right: &'static str,
    },
}

impl EvalError {
    #[cold]
    pub fn at(token: &Token, kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            lexeme: token.lexeme.clone(),
            line: token.line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::OperandNotNumber { .. } => ErrorCode::E6001,
            EvalErrorKind::OperandsNotNumbers { .. } => ErrorCode::E6002,
            EvalErrorKind::InvalidAddOperands { .. } => ErrorCode::E6003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let note = match self.kind {
            EvalErrorKind::OperandNotNumber { found } => format!("found {found}"),
            EvalErrorKind::OperandsNotNumbers { left, right }
            | EvalErrorKind::InvalidAddOperands { left, right } => {
                format!("found {left} and {right}")
            }
        };
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_line(self.line)
            .with_note(note)
    }
}

#[cold]
pub fn operand_not_number(operand: &Value) -> EvalErrorKind {
    EvalErrorKind::OperandNotNumber {
        found: operand.type_name(),
    }
}

#[cold]
pub fn operands_not_numbers(left: &Value, right: &Value) -> EvalErrorKind {
    EvalErrorKind::OperandsNotNumbers {
        left: left.type_name(),
        right: right.type_name(),
    }
}

#[cold]
pub fn invalid_add_operands(left: &Value, right: &Value) -> EvalErrorKind {
    EvalErrorKind::InvalidAddOperands {
        left: left.type_name(),
        right: right.type_name(),
    }
}

#[cfg(test)]
mod tests;
