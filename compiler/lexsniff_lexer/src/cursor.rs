//! Position-tracking cursor over source text.
//!
//! The cursor walks the text one `char` at a time and keeps the 1-based
//! line and column of the character under it, so every token and error the
//! scanner produces can be located without a second pass over the text.
//!
//! Bulk skips (comment bodies) go through `memchr`, then fix up the
//! line/column bookkeeping from the skipped slice.

use memchr::memmem;

use crate::Position;

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so callers can snapshot it before a speculative
/// scan and restore it afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Byte offset of the current character.
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first character of `src`.
    pub fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            line: Position::START.line,
            column: Position::START.column,
        }
    }

    /// The character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Line/column of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Source text from byte offset `start` up to the cursor.
    ///
    /// `start` must be a position previously returned by [`pos()`](Self::pos).
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} is ahead of cursor");
        &self.src[start..self.pos]
    }

    /// Consume the current character and return it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        Some(c)
    }

    /// Advance to the next `\n` (left unconsumed) or to end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = self.rest();
        let len = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        self.advance_bytes(len);
    }

    /// Advance past the first occurrence of `needle`.
    ///
    /// Returns `false` and leaves the cursor at end of input when `needle`
    /// does not occur in the remainder.
    pub fn eat_through(&mut self, needle: &str) -> bool {
        let rest = self.rest();
        match memmem::find(rest.as_bytes(), needle.as_bytes()) {
            Some(offset) => {
                self.advance_bytes(offset + needle.len());
                true
            }
            None => {
                self.advance_bytes(rest.len());
                false
            }
        }
    }

    /// Skip `len` bytes, keeping line and column in sync.
    ///
    /// `self.pos + len` must fall on a character boundary; every caller
    /// derives `len` from an ASCII needle match or the end of the source.
    fn advance_bytes(&mut self, len: usize) {
        let skipped = &self.src[self.pos..self.pos + len];
        match memchr::memrchr(b'\n', skipped.as_bytes()) {
            None => {
                self.column = self.column.saturating_add(char_count(skipped));
            }
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', skipped.as_bytes()).count();
                self.line = self
                    .line
                    .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
                self.column = 1 + char_count(&skipped[last + 1..]);
            }
        }
        self.pos += len;
    }
}

pub(crate) fn char_count(s: &str) -> u32 {
    u32::try_from(s.chars().count()).unwrap_or(u32::MAX)
}
