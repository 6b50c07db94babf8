use memchr::{memchr, memchr2};

use yamtok_common::{YamlError, YamlResult};

use super::char_utils::is_blank;

/// Finds where a quoted scalar may end.
pub(crate) trait QuoteType {
    /// Position of the next byte that might close the scalar.
    fn find_stop(&self, input: &[u8]) -> Option<usize>;

    /// Length of the escape sequence starting at `input[0]`, `None` if it closes the scalar.
    fn escape_len(&self, input: &[u8]) -> Option<usize>;
}

#[derive(Clone, Copy)]
pub(crate) struct SingleQuote;

impl QuoteType for SingleQuote {
    fn find_stop(&self, input: &[u8]) -> Option<usize> {
        memchr(b'\'', input)
    }

    fn escape_len(&self, input: &[u8]) -> Option<usize> {
        match input {
            [b'\'', b'\'', ..] => Some(2),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct DoubleQuote;

impl QuoteType for DoubleQuote {
    fn find_stop(&self, input: &[u8]) -> Option<usize> {
        memchr2(b'"', b'\\', input)
    }

    fn escape_len(&self, input: &[u8]) -> Option<usize> {
        match input {
            [b'\\', ..] => Some(2),
            _ => None,
        }
    }
}

/// Forward biased, peekable byte cursor over a single buffer.
///
/// Offsets are absolute positions in the buffer. The tokenizer only moves the cursor
/// forward, except for putting back the byte it just read (`skip_bytes(-1)`).
pub trait Reader {
    /// Current read offset.
    fn offset(&self) -> usize;

    /// Moves the read offset, clamped to the buffer length.
    fn set_offset(&mut self, offset: usize);

    /// Reads one byte and advances, `None` at the end of input.
    fn read_byte(&mut self) -> Option<u8>;

    /// Byte at the absolute `offset` without consuming anything.
    fn peek_byte_at(&self, offset: usize) -> Option<u8>;

    /// Moves the read offset by `amount` bytes, negative values put bytes back.
    fn skip_bytes(&mut self, amount: isize);

    /// Number of bytes left to read.
    fn remaining(&self) -> usize;

    /// Bytes in `[start, end)`.
    fn slice(&self, start: usize, end: usize) -> &[u8];

    #[inline]
    fn peek_byte(&self) -> Option<u8> {
        self.peek_byte_at(self.offset())
    }

    #[inline]
    fn peek_byte_is(&self, needle: u8) -> bool {
        matches!(self.peek_byte(), Some(x) if x == needle)
    }

    /// Unread part of the buffer.
    #[inline]
    fn rest(&self) -> &[u8] {
        let start = self.offset();
        self.slice(start, start + self.remaining())
    }

    /// Decodes `[start, end)` as UTF-8.
    fn slice_str(&self, start: usize, end: usize) -> YamlResult<&str> {
        simdutf8::basic::from_utf8(self.slice(start, end))
            .map_err(|_| YamlError::NonDecodable { span: start..end })
    }

    fn skip_space_tab(&mut self) -> usize {
        let amount = self.rest().iter().take_while(|c| is_blank(**c)).count();
        self.skip_bytes(amount as isize);
        amount
    }

    /// Absolute offset of the next `\r` or `\n`, or end of input.
    fn line_end(&self) -> usize {
        let rest = self.rest();
        self.offset() + memchr2(b'\r', b'\n', rest).unwrap_or(rest.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_quote_escapes() {
        assert_eq!(SingleQuote.find_stop(b"it''s'"), Some(2));
        assert_eq!(SingleQuote.escape_len(b"''s'"), Some(2));
        assert_eq!(SingleQuote.escape_len(b"' "), None);
        assert_eq!(SingleQuote.find_stop(b"abc"), None);
    }

    #[test]
    fn double_quote_escapes() {
        assert_eq!(DoubleQuote.find_stop(b"a\\\"b\""), Some(1));
        assert_eq!(DoubleQuote.escape_len(b"\\\"b\""), Some(2));
        assert_eq!(DoubleQuote.escape_len(b"\""), None);
    }
}
