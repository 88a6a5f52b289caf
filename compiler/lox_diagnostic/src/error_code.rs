//! Error codes for all front-end diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E0xxx: Lexical errors
//! - E1xxx: Syntax errors
//! - E6xxx: Runtime errors

use std::fmt;
use std::str::FromStr;

/// Pipeline phase an error code belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexer,
    Parser,
    Runtime,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Expected a specific token
    E1001,
    /// Expected expression
    E1002,
    /// Unconsumed tokens after a complete expression
    E1003,

    // Runtime Errors (E6xxx)
    /// Unary operand must be a number
    E6001,
    /// Binary operands must be numbers
    E6002,
    /// `+` operands must be two numbers or two strings
    E6003,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 => Phase::Lexer,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 => Phase::Parser,
            ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003 => Phase::Runtime,
        }
    }

    /// Long-form explanation shown by `lox explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A string literal was opened with `\"` but the input ended before \
                 the closing quote. Strings may span lines; the whole remainder of \
                 the input was consumed looking for the end.\n\n    \"abc\n"
            }
            ErrorCode::E0002 => {
                "The scanner found a character that starts no token. Only ASCII \
                 letters, digits, `_`, the operators `( ) { } , . - + ; * / ! = < >` \
                 and string quotes are recognized outside string literals.\n\n    1 @ 2\n"
            }
            ErrorCode::E1001 => {
                "The parser needed a specific token here, most often the `)` that \
                 closes a grouping.\n\n    (1 + 2\n"
            }
            ErrorCode::E1002 => {
                "An expression was expected but the next token cannot start one. \
                 Expressions start with a number, a string, `true`, `false`, `nil`, \
                 `(`, `-` or `!`.\n\n    1 + *\n"
            }
            ErrorCode::E1003 => {
                "A complete expression was parsed but tokens remain before the end \
                 of input. Only a single expression is accepted.\n\n    1 2\n"
            }
            ErrorCode::E6001 => {
                "Unary `-` was applied to a value that is not a number.\n\n    -\"abc\"\n"
            }
            ErrorCode::E6002 => {
                "Arithmetic (`-`, `*`, `/`) and comparison (`<`, `<=`, `>`, `>=`) \
                 operators require two numbers.\n\n    1 < \"2\"\n"
            }
            ErrorCode::E6003 => {
                "`+` adds two numbers or concatenates two strings; mixing kinds is \
                 not allowed and nothing is converted implicitly.\n\n    1 + \"b\"\n"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1002"`.
///
/// Case-insensitive.
impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
