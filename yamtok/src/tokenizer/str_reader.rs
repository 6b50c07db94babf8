use crate::tokenizer::Reader;

/// [`Reader`] over an in-memory byte slice.
pub struct StrReader<'a> {
    pub slice: &'a [u8],
    pub(crate) pos: usize,
}

impl<'a> From<&'a str> for StrReader<'a> {
    fn from(value: &'a str) -> Self {
        Self {
            slice: value.as_bytes(),
            pos: 0,
        }
    }
}

impl<'a> From<&'a [u8]> for StrReader<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self {
            slice: value,
            pos: 0,
        }
    }
}

impl<'r> Reader for StrReader<'r> {
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn offset(&self) -> usize {
        self.pos
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn set_offset(&mut self, offset: usize) {
        self.pos = offset.min(self.slice.len());
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn read_byte(&mut self) -> Option<u8> {
        let chr = self.slice.get(self.pos).copied();
        if chr.is_some() {
            self.pos += 1;
        }
        chr
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.slice.get(offset).copied()
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn skip_bytes(&mut self, amount: isize) {
        let pos = if amount < 0 {
            self.pos.saturating_sub(amount.unsigned_abs())
        } else {
            self.pos.saturating_add(amount.unsigned_abs())
        };
        self.set_offset(pos);
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn remaining(&self) -> usize {
        self.slice.len() - self.pos
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn slice(&self, start: usize, end: usize) -> &[u8] {
        let end = end.min(self.slice.len());
        &self.slice[start.min(end)..end]
    }
}
