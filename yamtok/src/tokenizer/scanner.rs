use std::iter::FusedIterator;

use tracing::{debug, trace};

use yamtok_common::{Marker, ScalarFault, UnsupportedKind, YamlError, YamlResult, YamlToken};

use crate::tokenizer::char_utils::{
    is_blank, is_break, is_decimal_char, is_integer_char, is_name_end, is_plain_terminator,
    is_white_or_eof, is_whitespace,
};
use crate::tokenizer::context::{ContextStack, Structure};
use crate::tokenizer::iterator::TokenIterator;
use crate::tokenizer::pending::{Batch, PendingTokens};
use crate::tokenizer::reader::{DoubleQuote, QuoteType, SingleQuote};
use crate::tokenizer::{Reader, StrReader};

/// Knobs for a [`Tokenizer`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenizerOptions {
    /// Context frames reserved up front. Deeper nesting grows the stack.
    pub initial_depth: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions { initial_depth: 10 }
    }
}

/// Pull tokenizer for YAML-like text.
///
/// Each call to [`Tokenizer::next_token`] yields one [`YamlToken`]. Tokens that carry
/// text expose it through [`Tokenizer::text`] until the next token is pulled.
///
/// ```
/// use yamtok::{Tokenizer, YamlToken};
///
/// let mut tokenizer = Tokenizer::from("key: 42\n");
/// assert_eq!(tokenizer.next_token(), Ok(YamlToken::DirectivesEnd));
/// assert_eq!(tokenizer.next_token(), Ok(YamlToken::MappingStart));
/// assert_eq!(tokenizer.next_token(), Ok(YamlToken::MappingKey));
/// assert_eq!(tokenizer.next_token(), Ok(YamlToken::Text));
/// assert_eq!(tokenizer.text(), Ok("key"));
/// assert_eq!(tokenizer.next_token(), Ok(YamlToken::Integer));
/// assert_eq!(tokenizer.text(), Ok("42"));
/// ```
pub struct Tokenizer<R> {
    reader: R,
    stack: ContextStack,
    pending: PendingTokens,
    last: YamlToken,
    line: u32,
    line_start: usize,
    block_start: usize,
    block_end: usize,
    error: Option<YamlError>,
}

impl<'a> From<&'a str> for Tokenizer<StrReader<'a>> {
    fn from(value: &'a str) -> Self {
        Tokenizer::new(StrReader::from(value))
    }
}

impl<'a> From<&'a [u8]> for Tokenizer<StrReader<'a>> {
    fn from(value: &'a [u8]) -> Self {
        Tokenizer::new(StrReader::from(value))
    }
}

impl<R: Reader> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Tokenizer::with_options(reader, TokenizerOptions::default())
    }

    pub fn with_options(reader: R, options: TokenizerOptions) -> Self {
        let line_start = reader.offset();
        Tokenizer {
            reader,
            stack: ContextStack::with_capacity(options.initial_depth),
            pending: PendingTokens::default(),
            last: YamlToken::None,
            line: 0,
            line_start,
            block_start: line_start,
            block_end: line_start,
            error: None,
        }
    }

    /// Pulls the next token. Pending tokens go first, otherwise the input is scanned.
    ///
    /// [`YamlToken::None`] marks the end of input and repeats on every further call.
    /// After an error the tokenizer is stuck and returns that same error again.
    pub fn next_token(&mut self) -> YamlResult<YamlToken> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let token = match self.pending.pop() {
            Some(token) => token,
            None => match self.fetch_next_token() {
                Ok(token) => token,
                Err(err) => {
                    debug!(%err, "tokenizer failed");
                    self.error = Some(err.clone());
                    return Err(err);
                }
            },
        };
        trace!(?token, pending = self.pending.len(), "next token");
        self.last = token;
        Ok(token)
    }

    /// Last delivered token, pulling one first if nothing was delivered yet.
    pub fn current(&mut self) -> YamlResult<YamlToken> {
        if self.last == YamlToken::None {
            self.next_token()
        } else {
            Ok(self.last)
        }
    }

    /// Kind of the innermost open structure.
    #[must_use]
    pub fn context(&self) -> YamlToken {
        self.stack.kind()
    }

    /// Overrides the kind of the innermost open structure.
    pub fn set_context(&mut self, token: YamlToken) {
        self.stack.set_kind(token);
    }

    /// Makes `token` the next one [`Tokenizer::next_token`] returns.
    pub fn push(&mut self, token: YamlToken) {
        self.pending.push_next(token);
    }

    /// Offset where the current line starts.
    #[must_use]
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    #[must_use]
    pub fn block_start(&self) -> usize {
        self.block_start
    }

    #[must_use]
    pub fn block_end(&self) -> usize {
        self.block_end
    }

    /// Zero indexed line of the last scan.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Position the last scan started at.
    #[must_use]
    pub fn marker(&self) -> Marker {
        self.mark_at(self.block_start)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Indentation rank of the innermost open structure.
    #[must_use]
    pub fn current_indent(&self) -> usize {
        self.stack.indent()
    }

    #[must_use]
    pub fn is_in_flow(&self) -> bool {
        self.stack.in_flow()
    }

    /// Whether tokens are queued ahead of the input.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Text of the last delivered token. Empty for tokens without text.
    ///
    /// Quoted scalars come back raw: quotes stripped, escapes left as written.
    pub fn text(&self) -> YamlResult<&str> {
        if !self.last.has_lexeme() || self.block_start >= self.block_end {
            return Ok("");
        }
        self.reader.slice_str(self.block_start, self.block_end)
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn into_reader(self) -> R {
        self.reader
    }

    /// Iterates over tokens paired with their text until the end of input.
    pub fn tokens(&mut self) -> TokenIterator<'_, R> {
        TokenIterator::new(self)
    }

    fn mark_at(&self, pos: usize) -> Marker {
        Marker {
            pos,
            line: self.line,
            col: pos.saturating_sub(self.line_start),
        }
    }

    fn fetch_next_token(&mut self) -> YamlResult<YamlToken> {
        loop {
            self.skip_whitespace();
            let start = self.reader.offset();
            self.block_start = start;
            self.block_end = start;
            let col = start.saturating_sub(self.line_start);

            let Some(chr) = self.reader.read_byte() else {
                return self.fetch_stream_end();
            };

            return match chr {
                b'#' => Ok(self.fetch_comment()),
                b'"' => self.fetch_quoted(DoubleQuote, col),
                b'\'' => self.fetch_quoted(SingleQuote, col),
                b'?' => Ok(YamlToken::MappingKey),
                b'-' => self.fetch_dash(col),
                b'.' => self.fetch_dot(col),
                b'&' => Ok(self.fetch_name(YamlToken::Anchor)),
                b'*' => Ok(self.fetch_name(YamlToken::Alias)),
                b'!' => Ok(self.fetch_name(YamlToken::Tag)),
                b'|' => Err(self.unsupported(UnsupportedKind::LiteralScalar, start)),
                b'>' => Err(self.unsupported(UnsupportedKind::FoldedScalar, start)),
                b'%' => Err(self.unsupported(UnsupportedKind::Directive, start)),
                b'@' | b'`' => Err(self.unsupported(UnsupportedKind::Reserved(chr as char), start)),
                b'{' => Ok(self.fetch_flow_start(Structure::FlowMapping, col)),
                b'[' => Ok(self.fetch_flow_start(Structure::FlowSequence, col)),
                b'}' => self.fetch_flow_end(Structure::FlowMapping, start),
                b']' => self.fetch_flow_end(Structure::FlowSequence, start),
                b',' => continue,
                b'+' | b'0'..=b'9' => {
                    self.reader.skip_bytes(-1);
                    self.fetch_number(col)
                }
                _ => {
                    self.reader.skip_bytes(-1);
                    self.fetch_plain(col)
                }
            };
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(chr) = self.reader.peek_byte() {
            if !is_whitespace(chr) {
                break;
            }
            self.reader.skip_bytes(1);
            if is_break(chr) {
                // `\r\n` is one line
                if chr == b'\n' || !self.reader.peek_byte_is(b'\n') {
                    self.line += 1;
                }
                self.line_start = self.reader.offset();
            }
        }
    }

    fn unsupported(&self, kind: UnsupportedKind, at: usize) -> YamlError {
        YamlError::Unsupported {
            kind,
            mark: self.mark_at(at),
        }
    }

    fn malformed(&self, open: usize, end: usize, reason: ScalarFault) -> YamlError {
        YamlError::MalformedScalar {
            span: open..end,
            mark: self.mark_at(open),
            reason,
        }
    }

    /// Three `chr` bytes at `pos` followed by whitespace or end of input.
    fn is_marker_at(&self, pos: usize, chr: u8) -> bool {
        self.reader.peek_byte_at(pos) == Some(chr)
            && self.reader.peek_byte_at(pos + 1) == Some(chr)
            && self.reader.peek_byte_at(pos + 2) == Some(chr)
            && is_white_or_eof(self.reader.peek_byte_at(pos + 3))
    }

    fn fetch_stream_end(&mut self) -> YamlResult<YamlToken> {
        if self.stack.kind() == YamlToken::None {
            return Ok(YamlToken::None);
        }
        debug!(depth = self.stack.depth(), "end of input closes open structures");
        let mut batch = Batch::default();
        self.stack.unwind(&mut batch, self.marker())?;
        if !batch.contains(YamlToken::DocumentEnd) {
            batch.push(YamlToken::DocumentEnd);
        }
        Ok(self.pending.deliver(batch))
    }

    fn fetch_document_start(&mut self) -> YamlResult<YamlToken> {
        debug!(line = self.line, "document start");
        let mut batch = Batch::default();
        self.stack.unwind(&mut batch, self.marker())?;
        self.stack.push(YamlToken::DirectivesEnd, 0, &mut batch);
        batch.push(YamlToken::DirectivesEnd);
        Ok(self.pending.deliver(batch))
    }

    fn fetch_document_end(&mut self) -> YamlResult<YamlToken> {
        debug!(line = self.line, "document end");
        let mut batch = Batch::default();
        self.stack.unwind(&mut batch, self.marker())?;
        if !batch.contains(YamlToken::DocumentEnd) {
            batch.push(YamlToken::DocumentEnd);
        }
        Ok(self.pending.deliver(batch))
    }

    /// Called with the `-` consumed.
    fn fetch_dash(&mut self, col: usize) -> YamlResult<YamlToken> {
        let pos = self.reader.offset();
        match self.reader.peek_byte_at(pos) {
            next if is_white_or_eof(next) => {
                self.resolve_indent(Structure::BlockSequence, None, col)
            }
            Some(b'-') if self.is_marker_at(pos - 1, b'-') => {
                self.reader.skip_bytes(2);
                self.fetch_document_start()
            }
            Some(b'0'..=b'9') => {
                self.reader.skip_bytes(-1);
                self.fetch_number(col)
            }
            _ => {
                self.reader.skip_bytes(-1);
                self.fetch_plain(col)
            }
        }
    }

    /// Called with the `.` consumed.
    fn fetch_dot(&mut self, col: usize) -> YamlResult<YamlToken> {
        let pos = self.reader.offset();
        if self.is_marker_at(pos - 1, b'.') {
            self.reader.skip_bytes(2);
            return self.fetch_document_end();
        }
        self.reader.skip_bytes(-1);
        match self.reader.peek_byte_at(pos) {
            Some(b'0'..=b'9') => self.fetch_number(col),
            _ => self.fetch_plain(col),
        }
    }

    fn fetch_comment(&mut self) -> YamlToken {
        self.reader.skip_space_tab();
        let start = self.reader.offset();
        let end = self.reader.line_end();
        let trimmed = self
            .reader
            .slice(start, end)
            .iter()
            .rposition(|c| !is_whitespace(*c))
            .map_or(start, |last| start + last + 1);
        self.reader.set_offset(end);
        self.block_start = start;
        self.block_end = trimmed;
        YamlToken::Comment
    }

    /// Called with the indicator consumed. Delimits the name up to whitespace or a
    /// flow indicator.
    fn fetch_name(&mut self, token: YamlToken) -> YamlToken {
        let start = self.reader.offset();
        let rest = self.reader.rest();
        let len = rest
            .iter()
            .position(|c| is_name_end(*c))
            .unwrap_or(rest.len());
        self.reader.skip_bytes(len as isize);
        self.block_start = start;
        self.block_end = start + len;
        token
    }

    fn fetch_number(&mut self, col: usize) -> YamlResult<YamlToken> {
        let start = self.reader.offset();
        let mut token = YamlToken::Integer;
        match self.reader.peek_byte() {
            Some(b'+') => self.reader.skip_bytes(1),
            Some(b'.') => {
                token = YamlToken::Decimal;
                self.reader.skip_bytes(1);
            }
            _ => {}
        }
        while let Some(chr) = self.reader.peek_byte() {
            if is_decimal_char(chr) {
                token = YamlToken::Decimal;
            } else if !is_integer_char(chr) {
                break;
            }
            self.reader.skip_bytes(1);
        }
        self.block_start = start;
        self.block_end = self.reader.offset();
        self.finish_scalar(token, col)
    }

    fn fetch_plain(&mut self, col: usize) -> YamlResult<YamlToken> {
        let start = self.reader.offset();
        let in_flow = self.stack.in_flow();
        let mut end = start;
        while let Some(chr) = self.reader.peek_byte() {
            let stop = match chr {
                b':' => is_white_or_eof(self.reader.peek_byte_at(self.reader.offset() + 1)),
                b',' => in_flow,
                _ => is_plain_terminator(chr),
            };
            if stop {
                break;
            }
            self.reader.skip_bytes(1);
            if !is_blank(chr) {
                end = self.reader.offset();
            }
        }
        self.block_start = start;
        self.block_end = end;
        self.finish_scalar(YamlToken::Text, col)
    }

    /// Called with the opening quote consumed.
    fn fetch_quoted<Q: QuoteType>(&mut self, quote: Q, col: usize) -> YamlResult<YamlToken> {
        let start = self.reader.offset();
        let end = self.read_quoted(&quote, start - 1)?;
        self.block_start = start;
        self.block_end = end;
        self.finish_scalar(YamlToken::Text, col)
    }

    /// Consumes up to and including the closing quote, returns the offset of the
    /// closing quote.
    fn read_quoted<Q: QuoteType>(&mut self, quote: &Q, open: usize) -> YamlResult<usize> {
        loop {
            let offset = self.reader.offset();
            let rest = self.reader.rest();
            let stop = quote.find_stop(rest);
            let scanned = stop.unwrap_or(rest.len());
            if let Some(pos) = rest[..scanned].iter().position(|c| *c < b' ') {
                let fault = ScalarFault::ControlByte(rest[pos]);
                return Err(self.malformed(open, offset + pos + 1, fault));
            }
            let Some(stop) = stop else {
                return Err(self.malformed(open, offset + rest.len(), ScalarFault::Unterminated));
            };
            match quote.escape_len(&rest[stop..]) {
                Some(len) => {
                    let Some(&escaped) = rest.get(stop + len - 1) else {
                        return Err(self.malformed(
                            open,
                            offset + rest.len(),
                            ScalarFault::Unterminated,
                        ));
                    };
                    if escaped < b' ' {
                        let fault = ScalarFault::ControlByte(escaped);
                        return Err(self.malformed(open, offset + stop + len, fault));
                    }
                    self.reader.skip_bytes((stop + len) as isize);
                }
                None => {
                    self.reader.skip_bytes((stop + 1) as isize);
                    return Ok(offset + stop);
                }
            }
        }
    }

    fn fetch_flow_start(&mut self, structure: Structure, col: usize) -> YamlToken {
        let start = structure.start_token();
        let in_sequence = self.stack.kind() == YamlToken::SequenceStart;
        let mut batch = Batch::default();
        self.stack.push_flow(start, structure.rank(col), &mut batch);
        if in_sequence {
            batch.push(YamlToken::SequenceEntry);
        }
        batch.push(start);
        self.pending.deliver(batch)
    }

    fn fetch_flow_end(&mut self, structure: Structure, at: usize) -> YamlResult<YamlToken> {
        let mark = self.mark_at(at);
        let Some(depth) = self.stack.find(structure.start_token()) else {
            return Err(YamlError::UnbalancedCloser {
                found: structure.closer(),
                mark,
            });
        };
        let mut batch = Batch::default();
        while self.stack.depth() >= depth {
            self.stack.pop(&mut batch, mark)?;
        }
        Ok(self.pending.deliver(batch))
    }

    /// Turns a scalar into a mapping key when `: ` follows it.
    fn finish_scalar(&mut self, token: YamlToken, col: usize) -> YamlResult<YamlToken> {
        if self.is_field_end() {
            self.resolve_indent(Structure::BlockMapping, Some(token), col)
        } else {
            Ok(token)
        }
    }

    /// Consumes `:` and one following blank if they come next, after optional blanks.
    /// Line breaks stay in place for line tracking.
    fn is_field_end(&mut self) -> bool {
        self.reader.skip_space_tab();
        let pos = self.reader.offset();
        if self.reader.peek_byte_at(pos) != Some(b':')
            || !is_white_or_eof(self.reader.peek_byte_at(pos + 1))
        {
            return false;
        }
        self.reader.skip_bytes(1);
        if matches!(self.reader.peek_byte(), Some(chr) if is_blank(chr)) {
            self.reader.skip_bytes(1);
        }
        true
    }

    /// Opens or closes block structures for an entry at `col` and queues the entry
    /// marker followed by `scalar`. In flow context only the markers are queued.
    fn resolve_indent(
        &mut self,
        structure: Structure,
        scalar: Option<YamlToken>,
        col: usize,
    ) -> YamlResult<YamlToken> {
        let mut batch = Batch::default();
        if !self.stack.in_flow() {
            let rank = structure.rank(col);
            let mark = self.marker();
            while self.stack.depth() > 0 && rank < self.stack.indent() {
                self.stack.pop(&mut batch, mark)?;
            }
            if rank != self.stack.indent() {
                let start = structure.start_token();
                self.stack.push(start, rank, &mut batch);
                batch.push(start);
            }
        }
        batch.push(structure.entry_token());
        batch.extend(scalar);
        Ok(self.pending.deliver(batch))
    }
}

impl<R: Reader> Iterator for Tokenizer<R> {
    type Item = YamlResult<YamlToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }
        match self.next_token() {
            Ok(YamlToken::None) => None,
            other => Some(other),
        }
    }
}

impl<R: Reader> FusedIterator for Tokenizer<R> {}
