//! Command-line argument parsing.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "\
Usage: lox [command] [args]

Commands:
  (none)            Start the interactive prompt
  <file>            Evaluate the expression in <file>
  run <file>        Same as above
  lex <file>        Print the token stream of <file>
  parse <file>      Print the parsed tree of <file>
  explain <code>    Describe an error code (e.g. E1002)

Options:
  -h, --help        Print this help

Environment:
  RUST_LOG          Enable tracing output (e.g. RUST_LOG=debug)
  LOX_LOG_TREE=1    Show tracing output as an indented tree
";

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    Run(PathBuf),
    Lex(PathBuf),
    Parse(PathBuf),
    Explain(String),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Ok(Command::Repl);
    };

    let command = match first.as_str() {
        "-h" | "--help" => Command::Help,
        "run" => Command::Run(required(&mut args, "run", "a file path")?.into()),
        "lex" => Command::Lex(required(&mut args, "lex", "a file path")?.into()),
        "parse" => Command::Parse(required(&mut args, "parse", "a file path")?.into()),
        "explain" => Command::Explain(required(&mut args, "explain", "an error code")?),
        flag if flag.starts_with('-') => return Err(UsageError::UnknownOption(first)),
        _ => Command::Run(first.into()),
    };

    match args.next() {
        Some(extra) => Err(UsageError::UnexpectedArgument(extra)),
        None => Ok(command),
    }
}

fn required(
    args: &mut impl Iterator<Item = String>,
    command: &'static str,
    what: &'static str,
) -> Result<String, UsageError> {
    args.next()
        .ok_or(UsageError::MissingArgument { command, what })
}
