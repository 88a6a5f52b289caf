//! Two-position cursor over the source text.
//!
//! `start` marks the first byte of the lexeme being scanned and `pos` is the
//! lookahead position. Both always sit on UTF-8 character boundaries: the
//! scanner consumes non-ASCII characters whole, and every memchr search
//! stops on an ASCII byte.
//!
//! Reads past the end return `0x00`, so predicates never need an explicit
//! bounds check.

/// Byte cursor with line tracking.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    start: usize,
    pos: usize,
    /// 1-based line of `pos`.
    line: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            start: 0,
            pos: 0,
            line: 1,
        }
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The byte at `pos`, or `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// The byte after `pos`, or `0x00` past EOF.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Consume and return the byte at `pos`.
    #[inline]
    pub(crate) fn bump(&mut self) -> u8 {
        let b = self.current();
        if !self.is_eof() {
            self.pos += 1;
        }
        b
    }

    /// Consume the current byte only if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds. `pred(0)` must be `false`.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Consume UTF-8 continuation bytes, finishing a multi-byte character
    /// whose leading byte was already bumped.
    pub(crate) fn finish_char(&mut self) {
        self.eat_while(|b| b & 0xC0 == 0x80);
    }

    /// Skip to the next `\n` (not consumed) or to EOF.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Consume a string body up to and including the closing `"`.
    ///
    /// Newlines inside the body advance the line counter. Returns `false`
    /// when EOF is reached first; the cursor is then left at EOF.
    pub(crate) fn eat_string_body(&mut self) -> bool {
        let remaining = &self.source.as_bytes()[self.pos..];
        let close = memchr::memchr(b'"', remaining);
        let body = &remaining[..close.unwrap_or(remaining.len())];
        let newlines = memchr::memchr_iter(b'\n', body).count();
        self.line = self
            .line
            .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));

        match close {
            Some(offset) => {
                self.pos += offset + 1;
                true
            }
            None => {
                self.pos = self.source.len();
                false
            }
        }
    }

    /// Begin a new lexeme at the current position.
    #[inline]
    pub(crate) fn mark_start(&mut self) {
        self.start = self.pos;
    }

    /// Source text from `start` to `pos`.
    #[inline]
    pub(crate) fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.pos]
    }

    /// Source text strictly between the first and last byte of the lexeme.
    ///
    /// Only valid for lexemes of at least two bytes with ASCII delimiters.
    pub(crate) fn lexeme_inner(&self) -> &'a str {
        &self.source[self.start + 1..self.pos - 1]
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub(crate) fn new_line(&mut self) {
        self.line = self.line.saturating_add(1);
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }
}
