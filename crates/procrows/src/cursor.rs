//! Positional bookkeeping over a borrowed byte buffer.
//!
//! A [`Cursor`] never owns or copies the bytes it walks. Each pass creates
//! its own cursor, so two scans of the same buffer cannot observe each
//! other's counters.
//!
//! Invariants
//! - `position <= buffer.len()` at all times.
//! - `column` is the number of bytes consumed since the last terminator.
//! - `max_line_length` only ever grows, and only at a terminator.

/// A stateful walker over a byte buffer.
///
/// Typical loop:
/// ```rust
/// use procrows::Cursor;
///
/// let mut cursor = Cursor::new(b"ab\nc\n");
/// while cursor.has_more() {
///     let byte = cursor.current_byte();
///     if byte == b'\n' {
///         cursor.on_line_terminator(byte);
///     } else {
///         cursor.advance();
///     }
/// }
/// assert_eq!(cursor.line_count(), 2);
/// assert_eq!(cursor.max_line_length(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    buffer: &'src [u8],
    position: usize,
    column: usize,
    line_count: usize,
    max_line_length: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned at the start of `buffer`.
    #[must_use]
    pub fn new(buffer: &'src [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            column: 0,
            line_count: 0,
            max_line_length: 0,
        }
    }

    /// Rebinds the cursor to `buffer` and zeroes every counter.
    ///
    /// An empty buffer is valid and scans as zero lines.
    pub fn reset(&mut self, buffer: &'src [u8]) {
        *self = Self::new(buffer);
    }

    /// Returns `true` while there are unread bytes.
    #[inline]
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// Returns the byte under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the buffer. Passes check
    /// [`has_more`](Self::has_more) first, so reaching this is a bug in the
    /// caller rather than a property of the data.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn current_byte(&self) -> u8 {
        match self.buffer.get(self.position) {
            Some(&byte) => byte,
            None => self.out_of_range(),
        }
    }

    /// Returns the byte under the cursor, or `None` at the end.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.buffer.get(self.position).copied()
    }

    /// Moves past one byte of line content.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the buffer.
    #[inline]
    #[track_caller]
    pub fn advance(&mut self) {
        if !self.has_more() {
            self.out_of_range();
        }
        self.position += 1;
        self.column += 1;
    }

    /// Records the end of a line and moves past its terminator.
    ///
    /// Must be called when [`current_byte`](Self::current_byte) is the
    /// terminator. The line that just ended is `column` bytes long; after the
    /// call the cursor sits on the first byte of the next line with
    /// `column == 0`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the buffer.
    #[inline]
    #[track_caller]
    pub fn on_line_terminator(&mut self, byte: u8) {
        if !self.has_more() {
            self.out_of_range();
        }
        debug_assert_eq!(
            self.buffer[self.position], byte,
            "terminator does not match the byte under the cursor"
        );
        self.line_count += 1;
        self.max_line_length = self.max_line_length.max(self.column);
        self.column = 0;
        self.position += 1;
    }

    /// Absolute offset of the next byte to read.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes consumed since the last terminator.
    #[inline]
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Terminators seen so far.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Longest terminated line seen so far.
    #[inline]
    #[must_use]
    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// The buffer being walked.
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &'src [u8] {
        self.buffer
    }

    #[cold]
    #[track_caller]
    fn out_of_range(&self) -> ! {
        panic!(
            "cursor out of range: position {} in a buffer of {} bytes",
            self.position,
            self.buffer.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(cursor: &mut Cursor<'_>) {
        while cursor.has_more() {
            let byte = cursor.current_byte();
            if byte == b'\n' {
                cursor.on_line_terminator(byte);
            } else {
                cursor.advance();
            }
        }
    }

    #[test]
    fn empty_buffer_has_nothing_to_read() {
        let cursor = Cursor::new(b"");
        assert!(!cursor.has_more());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn advance_moves_position_and_column_together() {
        let mut cursor = Cursor::new(b"abc");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.current_byte(), b'c');
    }

    #[test]
    fn terminator_resets_column_and_is_consumed() {
        let mut cursor = Cursor::new(b"ab\ncd");
        cursor.advance();
        cursor.advance();
        cursor.on_line_terminator(b'\n');
        assert_eq!(cursor.line_count(), 1);
        assert_eq!(cursor.max_line_length(), 2);
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.current_byte(), b'c');
    }

    #[test]
    fn max_line_length_ignores_terminators_of_later_lines() {
        let mut cursor = Cursor::new(b"a\nbb\nc\n");
        walk(&mut cursor);
        assert_eq!(cursor.line_count(), 3);
        assert_eq!(cursor.max_line_length(), 2);
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn trailing_fragment_does_not_count_as_a_line() {
        let mut cursor = Cursor::new(b"a\nlonger tail");
        walk(&mut cursor);
        assert_eq!(cursor.line_count(), 1);
        assert_eq!(cursor.max_line_length(), 1);
        assert_eq!(cursor.column(), 11);
    }

    #[test]
    fn reset_zeroes_every_counter() {
        let mut cursor = Cursor::new(b"xyz\n\n");
        walk(&mut cursor);
        cursor.reset(b"q");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.line_count(), 0);
        assert_eq!(cursor.max_line_length(), 0);
        assert_eq!(cursor.buffer(), b"q");
    }

    #[test]
    #[should_panic(expected = "cursor out of range")]
    fn advance_past_end_panics() {
        let mut cursor = Cursor::new(b"a");
        cursor.advance();
        cursor.advance();
    }

    #[test]
    #[should_panic(expected = "cursor out of range")]
    fn current_byte_at_end_panics() {
        let cursor = Cursor::new(b"");
        let _ = cursor.current_byte();
    }
}
