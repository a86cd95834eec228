//! Character cursor over formula text.

use crate::lexer::span::ByteOffset;

/// Byte-position cursor that always rests on a `char` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: ByteOffset,
}

impl Cursor {
    /// Creates a cursor at byte offset `0`.
    pub(crate) fn new() -> Self {
        Self {
            offset: ByteOffset::new(0),
        }
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> ByteOffset {
        self.offset
    }

    /// Returns `true` if the cursor is at or beyond input end.
    pub(crate) fn is_eof(&self, input: &str) -> bool {
        self.offset.as_usize() >= input.len()
    }

    /// Returns the remaining input starting at the cursor.
    pub(crate) fn rest<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.offset.as_usize()..).unwrap_or("")
    }

    /// Returns the character at cursor position.
    pub(crate) fn peek_char(&self, input: &str) -> Option<char> {
        self.rest(input).chars().next()
    }

    /// Consumes one character and returns it.
    pub(crate) fn advance_char(&mut self, input: &str) -> Option<char> {
        let ch = self.peek_char(input)?;
        self.advance_by(ch.len_utf8(), input);
        Some(ch)
    }

    /// Advances the cursor by `count` bytes, clamped to input length.
    ///
    /// Callers pass lengths measured from [`Self::rest`], so the new offset
    /// stays on a `char` boundary.
    pub(crate) fn advance_by(&mut self, count: usize, input: &str) {
        let next = self
            .offset
            .as_usize()
            .saturating_add(count)
            .min(input.len());
        self.offset = ByteOffset::from_usize(next);
    }
}
