//! Byte-offset cursor over a `&str` source.
//!
//! Matchers copy a cursor, advance the copy, and commit it back only on
//! success. The cursor is [`Copy`], so a snapshot is just an assignment.
//!
//! # Char Boundaries
//!
//! The position is always on a UTF-8 character boundary. Byte-level helpers
//! ([`eat_byte`](Cursor::eat_byte), [`eat_ascii_while`](Cursor::eat_ascii_while))
//! only ever step over ASCII bytes; everything else advances by whole
//! characters.

/// Cursor over a source string, positioned at a byte offset.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at `pos`.
    ///
    /// # Contract
    ///
    /// `pos` must be a character boundary of `text` (or `text.len()`).
    pub fn new(text: &'a str, pos: usize) -> Self {
        debug_assert!(
            text.is_char_boundary(pos),
            "cursor offset {pos} is not a char boundary"
        );
        Self { text, pos }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The whole source the cursor walks over.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Source text from the current position to the end.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.text.get(self.pos..).unwrap_or("")
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Byte at the current position, or `None` at EOF.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Bytes consumed since `start`.
    #[inline]
    pub fn consumed_since(&self, start: usize) -> usize {
        self.pos - start
    }

    /// Move past one character. Returns the character, or `None` at EOF.
    #[inline]
    pub fn advance_char(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `byte` if it is next. `byte` must be ASCII.
    #[inline]
    pub fn eat_byte(&mut self, byte: u8) -> bool {
        debug_assert!(byte.is_ascii());
        if self.current_byte() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next byte if it is one of `set` (ASCII only).
    #[inline]
    pub fn eat_any_byte(&mut self, set: &[u8]) -> bool {
        match self.current_byte() {
            Some(b) if set.contains(&b) => {
                debug_assert!(b.is_ascii());
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume `s` if the rest of the source starts with it.
    #[inline]
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consume one character if `pred` accepts it.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.current() {
            Some(c) if pred(c) => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consume characters while `pred` accepts them. Returns bytes consumed.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.rest().len(), |(i, _)| i);
        self.pos += len;
        self.pos - start
    }

    /// Consume ASCII bytes while `pred` accepts them. Returns bytes consumed.
    ///
    /// # Contract
    ///
    /// `pred` must reject every non-ASCII byte, otherwise the cursor could
    /// stop inside a multi-byte character.
    #[inline]
    pub fn eat_ascii_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        let bytes = self.text.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            if !pred(b) {
                break;
            }
            debug_assert!(b.is_ascii(), "eat_ascii_while predicate accepted non-ASCII byte");
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance to the next `\n` (not consumed) or to EOF.
    ///
    /// Uses `memchr` for the search; line comments are the longest runs the
    /// lexer skips outside of long brackets.
    pub fn eat_until_newline(&mut self) {
        match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.text.len(),
        }
    }

    /// Jump to an absolute offset at or after the current position.
    ///
    /// Used after an out-of-band search (e.g. a long-bracket closer) has
    /// located where the match ends.
    #[inline]
    pub fn jump_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor cannot move backwards");
        debug_assert!(self.text.is_char_boundary(pos));
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests;
