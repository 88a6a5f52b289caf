//! Command handlers for the `lox` CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! `read_file` and `report_error` live here in the module root.

use std::io;
use std::path::{Path, PathBuf};

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use thiserror::Error;

use crate::{exit_code, PipelineError};

mod debug;
mod explain;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use repl::{run_prompt, run_repl};
pub use run::run_file;

/// Why a command failed.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    #[error("unknown error code `{0}`")]
    UnknownCode(String),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl CommandError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Read { .. } => exit_code::NO_INPUT,
            CommandError::Write(_) => exit_code::SOFTWARE,
            CommandError::UnknownCode(_) => exit_code::USAGE,
            CommandError::Pipeline(err) => err.exit_code(),
        }
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Emit `err` as diagnostics followed by a summary line.
pub fn report_to<E: DiagnosticEmitter>(err: &PipelineError, emitter: &mut E) {
    let diagnostics = err.diagnostics();
    emitter.emit_all(&diagnostics);
    let errors = diagnostics.iter().filter(|diag| diag.is_error()).count();
    emitter.emit_summary(errors);
    emitter.flush();
}

/// Report a failed command on stderr.
pub fn report_error(err: &CommandError) {
    match err {
        CommandError::Pipeline(err) => {
            report_to(err, &mut TerminalEmitter::stderr(ColorMode::Auto));
        }
        other => eprintln!("error: {other}"),
    }
}
