//! Lox expression interpreter.
//!
//! Wires the three phases together: scan, parse, evaluate. Each phase
//! fails with its own error type; [`PipelineError`] carries whichever
//! phase stopped the run.
//!
//! # Tracing
//!
//! - `RUST_LOG=debug`: phase entry and exit with counts
//! - `RUST_LOG=trace`: every token, grammar rule and evaluated node
//! - `LOX_LOG_TREE=1`: indented span tree instead of flat lines

pub mod cli;
pub mod commands;
pub mod tracing_setup;

use lox_diagnostic::Diagnostic;
use lox_eval::{EvalError, Value};
use lox_ir::Expr;
use lox_lexer::LexError;
use lox_parse::ParseError;
use thiserror::Error;
use tracing::debug;

/// Process exit status for each failure class (BSD `sysexits` values).
pub mod exit_code {
    pub const USAGE: u8 = 64;
    /// Lexical or syntax errors in the input.
    pub const DATA_ERR: u8 = 65;
    pub const NO_INPUT: u8 = 66;
    /// Runtime errors.
    pub const SOFTWARE: u8 = 70;
}

/// The phase that stopped a run.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PipelineError {
    #[error("{count} lexical error(s)", count = .0.len())]
    Lex(Vec<LexError>),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] EvalError),
}

impl From<Vec<LexError>> for PipelineError {
    fn from(errors: Vec<LexError>) -> Self {
        PipelineError::Lex(errors)
    }
}

impl PipelineError {
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            PipelineError::Lex(errors) => errors.iter().map(LexError::to_diagnostic).collect(),
            PipelineError::Parse(err) => vec![err.to_diagnostic()],
            PipelineError::Runtime(err) => vec![err.to_diagnostic()],
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Lex(_) | PipelineError::Parse(_) => exit_code::DATA_ERR,
            PipelineError::Runtime(_) => exit_code::SOFTWARE,
        }
    }
}

/// Scan and parse `source` into one expression.
///
/// Lexical errors stop the run before parsing.
pub fn parse_source(source: &str) -> Result<Expr, PipelineError> {
    let (tokens, errors) = lox_lexer::scan(source).into_parts();
    if !errors.is_empty() {
        return Err(errors.into());
    }
    Ok(lox_parse::parse(&tokens)?)
}

/// Scan, parse and evaluate `source`.
pub fn run_source(source: &str) -> Result<Value, PipelineError> {
    let expr = parse_source(source)?;
    let value = lox_eval::evaluate(&expr)?;
    debug!(kind = value.type_name(), "run complete");
    Ok(value)
}
