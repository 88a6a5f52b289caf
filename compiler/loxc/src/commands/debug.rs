//! Debug commands: `lex` and `parse` for inspecting the front-end.

use std::io::Write;
use std::path::Path;

use lox_ir::render;

use super::{read_file, CommandError};
use crate::{parse_source, PipelineError};

/// Print the token stream of a file, one token per line.
///
/// Nothing is printed when the scan found lexical errors.
pub fn lex_file(path: &Path, out: &mut impl Write) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let (tokens, errors) = lox_lexer::scan(&source).into_parts();
    if !errors.is_empty() {
        return Err(PipelineError::Lex(errors).into());
    }
    for token in &tokens {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

/// Print the parsed tree of a file in prefix form.
pub fn parse_file(path: &Path, out: &mut impl Write) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let expr = parse_source(&source)?;
    writeln!(out, "{}", render(&expr))?;
    Ok(())
}
