//! Lox CLI

use std::io;
use std::process::ExitCode;

use loxc::cli::{parse_args, Command, USAGE};
use loxc::commands::{explain_error, lex_file, parse_file, report_error, run_file, run_repl};
use loxc::exit_code;
use loxc::tracing_setup::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            return ExitCode::from(exit_code::USAGE);
        }
    };

    let mut stdout = io::stdout();
    let result = match command {
        Command::Help => {
            print!("{USAGE}");
            Ok(())
        }
        Command::Repl => run_repl(),
        Command::Run(path) => run_file(&path, &mut stdout),
        Command::Lex(path) => lex_file(&path, &mut stdout),
        Command::Parse(path) => parse_file(&path, &mut stdout),
        Command::Explain(code) => explain_error(&code, &mut stdout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
