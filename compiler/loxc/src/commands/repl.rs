//! The interactive prompt.
//!
//! Each line is a complete program. Errors are reported and the prompt
//! carries on; only end of input or an I/O failure stops it.

use std::io::{self, BufRead, Write};

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use tracing::debug;

use super::{report_to, CommandError};
use crate::run_source;

const PROMPT: &str = "> ";

/// Run the prompt on stdin/stdout, reporting errors on stderr.
pub fn run_repl() -> Result<(), CommandError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto);
    run_prompt(stdin.lock(), &mut stdout, &mut emitter)?;
    Ok(())
}

/// Read lines from `input` until EOF, printing each value to `out`.
///
/// Returns the number of lines that failed.
pub fn run_prompt<R, W, E>(input: R, out: &mut W, emitter: &mut E) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
    E: DiagnosticEmitter,
{
    let mut failures = 0;
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match run_source(&line) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(err) => {
                failures += 1;
                report_to(&err, emitter);
            }
        }
    }
    debug!(failures, "prompt closed");
    Ok(failures)
}
