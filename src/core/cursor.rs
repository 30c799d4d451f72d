//! Shared tokenizer for the style, palette and config file languages.
//!
//! [`Cursor`] walks an immutable `&str` with an explicit byte position. Every
//! token method skips leading whitespace first. Optional punctuation is matched
//! with [`Cursor::eat`], which leaves the position untouched on a mismatch, so
//! callers never need to roll the cursor back by hand.

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

/// Whitespace skipped before every token
pub fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Characters of style property names and color tokens
pub fn is_name_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Characters of config keys and indices
pub fn is_key_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Input not consumed yet
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn skip_whitespace(&mut self) {
        self.pos = self.next_non_blank();
    }

    fn next_non_blank(&self) -> usize {
        let bytes = self.input.as_bytes();
        let mut pos = self.pos;
        while pos < bytes.len() && is_blank(bytes[pos]) {
            pos += 1;
        }
        pos
    }

    /// Next non-blank byte without consuming anything
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.next_non_blank()).copied()
    }

    /// Consume `expected` after optional whitespace. Returns false and leaves
    /// the cursor where it was when the next byte differs.
    pub fn eat(&mut self, expected: u8) -> bool {
        let pos = self.next_non_blank();
        if self.input.as_bytes().get(pos) == Some(&expected) {
            self.pos = pos + 1;
            true
        } else {
            false
        }
    }

    /// Consume a non-empty run of bytes accepted by `is_token_char`.
    /// Returns `None` without consuming when no such byte follows.
    pub fn token(&mut self, is_token_char: fn(u8) -> bool) -> Option<&'a str> {
        let start = self.next_non_blank();
        let bytes = self.input.as_bytes();
        let mut end = start;
        while end < bytes.len() && is_token_char(bytes[end]) {
            end += 1;
        }
        if end == start {
            return None;
        }
        self.pos = end;
        Some(&self.input[start..end])
    }

    /// Consume one raw character, whitespace included
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// True when only whitespace is left
    pub fn only_whitespace_left(&self) -> bool {
        self.next_non_blank() >= self.input.len()
    }
}
