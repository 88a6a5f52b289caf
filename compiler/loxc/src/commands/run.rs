//! The `run` command: evaluate the expression in a file.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::{read_file, CommandError};
use crate::run_source;

/// Evaluate the file at `path` and print the value to `out`.
pub fn run_file(path: &Path, out: &mut impl Write) -> Result<(), CommandError> {
    let source = read_file(path)?;
    debug!(path = %path.display(), bytes = source.len(), "running file");
    let value = run_source(&source)?;
    writeln!(out, "{value}")?;
    Ok(())
}
