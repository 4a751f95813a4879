//! Bounds-checked cursor for scanning a single line.
//!
//! Every read goes through slice accessors, so a short or malformed line
//! can never index past its end. Delimiters this crate scans for are all
//! ASCII, which keeps every offset the cursor stops at on a `char` boundary.

use memchr::{memchr, memmem};

/// A cursor over one line of text.
///
/// # Example
/// ```
/// use markdown2html::cursor::Cursor;
///
/// let mut cursor = Cursor::new("## Title");
/// assert_eq!(cursor.skip_while(|b| b == b'#'), 2);
/// assert!(cursor.eat(b' '));
/// assert_eq!(cursor.rest(), "Title");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Create a cursor starting at an offset, clamped to the input length.
    #[inline]
    pub fn new_at(input: &'a str, offset: usize) -> Self {
        Self {
            input,
            pos: offset.min(input.len()),
        }
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Advance by `n` bytes, stopping at the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.input.len());
    }

    /// Check if the current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Check if the remaining input starts with `bytes`.
    #[inline]
    pub fn at_bytes(&self, bytes: &[u8]) -> bool {
        self.remaining_bytes().starts_with(bytes)
    }

    /// Skip while predicate is true. Returns the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Find the next occurrence of a byte, relative to the current position.
    #[inline]
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr(needle, self.remaining_bytes())
    }

    /// Find the next occurrence of a byte sequence, relative to the current position.
    #[inline]
    pub fn find_bytes(&self, needle: &[u8]) -> Option<usize> {
        memmem::find(self.remaining_bytes(), needle)
    }

    /// The unconsumed rest of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or("")
    }

    #[inline]
    fn remaining_bytes(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_advance_is_clamped() {
        let mut cursor = Cursor::new("ab");
        cursor.advance(10);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_cursor_new_at_is_clamped() {
        let cursor = Cursor::new_at("hello", 99);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.find_bytes(b"lo"), None);
        let cursor = Cursor::new_at("hello world", 6);
        assert_eq!(cursor.peek(), Some(b'w'));
    }

    #[test]
    fn test_cursor_skip_while() {
        let mut cursor = Cursor::new("###x");
        assert_eq!(cursor.skip_while(|b| b == b'#'), 3);
        assert_eq!(cursor.peek(), Some(b'x'));
        assert_eq!(cursor.skip_while(|b| b == b'#'), 0);
    }

    #[test]
    fn test_cursor_eat() {
        let mut cursor = Cursor::new("- a");
        assert!(cursor.eat(b'-'));
        assert!(!cursor.eat(b'-'));
        assert!(cursor.eat(b' '));
        assert_eq!(cursor.rest(), "a");
    }

    #[test]
    fn test_cursor_find() {
        let mut cursor = Cursor::new("a b c");
        assert_eq!(cursor.find(b' '), Some(1));
        cursor.advance(2);
        assert_eq!(cursor.find(b' '), Some(1));
        assert_eq!(cursor.find(b'x'), None);
    }

    #[test]
    fn test_cursor_find_bytes() {
        let mut cursor = Cursor::new("x **y** z");
        assert_eq!(cursor.find_bytes(b"**"), Some(2));
        cursor.advance(4);
        assert_eq!(cursor.find_bytes(b"**"), Some(1));
        assert!(!cursor.at_bytes(b"**"));
        cursor.advance(1);
        assert!(cursor.at_bytes(b"**"));
    }

    #[test]
    fn test_cursor_rest_after_multibyte_text() {
        let mut cursor = Cursor::new("héllo wörld");
        cursor.advance(cursor.find(b' ').unwrap_or(0) + 1);
        assert_eq!(cursor.rest(), "wörld");
    }
}
