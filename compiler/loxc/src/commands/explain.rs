//! The `explain` command: describe an error code.

use std::io::Write;

use lox_diagnostic::ErrorCode;

use super::CommandError;

pub fn explain_error(code_str: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(CommandError::UnknownCode(code_str.to_owned()));
    };
    writeln!(out, "{code} ({:?} error)", code.phase())?;
    writeln!(out)?;
    writeln!(out, "{}", code.explanation())?;
    Ok(())
}
