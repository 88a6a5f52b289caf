//! Scanner for the Lox expression language.
//!
//! One left-to-right pass over the source bytes. Every recognized lexeme
//! becomes a [`Token`]; every unrecognized one becomes a [`LexError`] and
//! scanning continues. The token sequence always ends with exactly one
//! [`TokenKind::Eof`] token, whatever errors were found.
//!
//! # Design
//!
//! Dispatch is on the leading byte. Two-character operators (`!=`, `==`,
//! `<=`, `>=`) use one byte of lookahead. Keywords are scanned as
//! identifiers and then resolved through the reserved-word table.

mod cursor;
mod keywords;
mod lex_error;

use cursor::Cursor;
use lox_ir::{Literal, Token, TokenKind};
use tracing::{debug, trace};

pub use lex_error::{LexError, LexErrorKind};

/// Result of scanning one source text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    /// Complete token sequence, terminated by one EOF token.
    pub tokens: Vec<Token>,
    /// Lexical errors in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    /// A non-empty error list means the tokens should not be parsed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<LexError>) {
        (self.tokens, self.errors)
    }
}

/// Scan `source` into tokens, collecting every lexical error.
pub fn scan(source: &str) -> LexOutput {
    let output = Scanner::new(source).scan_tokens();
    debug!(
        bytes = source.len(),
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scanned source"
    );
    output
}

/// Single-use scanner state.
///
/// Construct a fresh scanner for every source text.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            // Rough guess: one token per four bytes of source.
            tokens: Vec::with_capacity(source.len() / 4 + 1),
            errors: Vec::new(),
        }
    }

    /// Run the scan to completion.
    pub fn scan_tokens(mut self) -> LexOutput {
        while !self.cursor.is_eof() {
            self.cursor.mark_start();
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.cursor.line()));
        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        let b = self.cursor.bump();
        match b {
            b'(' => self.add(TokenKind::LeftParen),
            b')' => self.add(TokenKind::RightParen),
            b'{' => self.add(TokenKind::LeftBrace),
            b'}' => self.add(TokenKind::RightBrace),
            b',' => self.add(TokenKind::Comma),
            b'.' => self.add(TokenKind::Dot),
            b'-' => self.add(TokenKind::Minus),
            b'+' => self.add(TokenKind::Plus),
            b';' => self.add(TokenKind::Semicolon),
            b'*' => self.add(TokenKind::Star),
            b'!' => self.one_or_two(TokenKind::Bang, TokenKind::BangEqual),
            b'=' => self.one_or_two(TokenKind::Equal, TokenKind::EqualEqual),
            b'<' => self.one_or_two(TokenKind::Less, TokenKind::LessEqual),
            b'>' => self.one_or_two(TokenKind::Greater, TokenKind::GreaterEqual),
            b'/' => self.slash_or_comment(),
            b' ' | b'\t' | b'\r' => {}
            b'\n' => self.cursor.new_line(),
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            0x80..=0xFF => {
                self.cursor.finish_char();
                self.unexpected();
            }
            _ => self.unexpected(),
        }
    }

    fn add(&mut self, kind: TokenKind) {
        self.push(kind, None);
    }

    fn push(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.cursor.lexeme();
        trace!(?kind, lexeme, line = self.cursor.line(), "token");
        self.tokens.push(Token::new(kind, lexeme, literal, self.cursor.line()));
    }

    fn error(&mut self, kind: LexErrorKind) {
        trace!(?kind, line = self.cursor.line(), pos = self.cursor.pos(), "lex error");
        self.errors.push(LexError::new(kind, self.cursor.line()));
    }

    fn one_or_two(&mut self, single: TokenKind, with_equal: TokenKind) {
        let kind = if self.cursor.eat(b'=') {
            with_equal
        } else {
            single
        };
        self.add(kind);
    }

    fn slash_or_comment(&mut self) {
        if self.cursor.eat(b'/') {
            self.cursor.eat_until_newline_or_eof();
        } else {
            self.add(TokenKind::Slash);
        }
    }

    fn string(&mut self) {
        if self.cursor.eat_string_body() {
            let value = self.cursor.lexeme_inner();
            self.push(TokenKind::String, Some(Literal::Str(value.to_owned())));
        } else {
            self.error(LexErrorKind::UnterminatedString);
        }
    }

    fn number(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        // A trailing `.` belongs to the number only when a digit follows.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.bump();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        // Digits with an optional `.digits` tail always decode; values past
        // the `f64` range come back as `inf`.
        let value = self.cursor.lexeme().parse().unwrap_or(f64::INFINITY);
        self.push(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let kind = keywords::lookup(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add(kind);
    }

    fn unexpected(&mut self) {
        let c = self.cursor.lexeme().chars().next().unwrap_or('\0');
        self.error(LexErrorKind::UnexpectedCharacter(c));
    }
}

#[cfg(test)]
mod tests;
