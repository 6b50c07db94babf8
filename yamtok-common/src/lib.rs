pub mod error;

pub use error::{ScalarFault, UnsupportedKind, YamlError, YamlResult};

use std::fmt::{Display, Formatter};

///
/// [`YamlToken`] emitted by the tokenizer.
///
/// A token carries no payload, its text (if any) is the byte range the tokenizer
/// scanned last and is only valid until the next token is produced.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum YamlToken {
    /// Comment until the end of line, e.g.
    /// ```yaml
    ///   # comment
    /// ```
    Comment,
    /// Tag of the following node e.g. `!!int` in
    /// ```yaml
    ///   !!int 3
    /// ```
    Tag,
    /// Directive line starting with `%`. Recognized but never produced by the scanner.
    Directive,
    /// Start of a document, either explicit `---` or implied by the first structure.
    DirectivesEnd,
    /// End of a document, either explicit `...` or implied by end of input.
    DocumentEnd,
    /// Start of a mapping, e.g. `{` in
    /// ```yaml
    ///  { a: b}
    /// #^-- start of mapping
    /// ```
    MappingStart,
    /// Marks that the next scalar is a mapping key.
    MappingKey,
    /// End of a map token, e.g. `}` in
    /// ```yaml
    ///  { a: b}
    /// #      ^-- end of mapping
    /// ```
    MappingEnd,
    /// Start of a sequence token, e.g. `[` in
    /// ```yaml
    ///  [a, b, c]
    /// #^-- start of sequence
    /// ```
    SequenceStart,
    /// End of a sequence token, e.g. `]` in
    /// ```yaml
    ///  [a, b, c]
    /// #        ^-- end of sequence
    /// ```
    SequenceEnd,
    /// Entry of a block sequence, e.g. `-` in
    /// ```yaml
    ///  - a
    /// ```
    SequenceEntry,
    /// Number without a fraction or exponent.
    Integer,
    /// Number containing `.`, `e` or `E`.
    Decimal,
    /// Plain or quoted scalar.
    Text,
    /// Element with alternative name e.g. `&foo [x,y]`
    Anchor,
    /// Reference to an element with alternative name e.g. `*foo`
    Alias,
    /// Reserved indicator (`@` or `` ` ``). Recognized but never produced by the scanner.
    Reserved,
    /// Sentinel returned once the stream is exhausted.
    #[default]
    None,
}

impl YamlToken {
    /// Tokens that may precede the content of a document.
    pub const HEADER: [YamlToken; 4] = [
        YamlToken::Comment,
        YamlToken::Directive,
        YamlToken::DirectivesEnd,
        YamlToken::None,
    ];

    #[inline]
    #[must_use]
    pub fn is_header(self) -> bool {
        YamlToken::HEADER.contains(&self)
    }

    /// Returns `false` for structural tokens that never have text behind them.
    #[inline]
    #[must_use]
    pub const fn has_lexeme(self) -> bool {
        !matches!(
            self,
            YamlToken::DirectivesEnd
                | YamlToken::DocumentEnd
                | YamlToken::MappingStart
                | YamlToken::MappingKey
                | YamlToken::MappingEnd
                | YamlToken::SequenceStart
                | YamlToken::SequenceEntry
                | YamlToken::SequenceEnd
                | YamlToken::None
        )
    }

    /// Token that closes a structure opened by `self`, if `self` opens one.
    #[inline]
    #[must_use]
    pub const fn closing(self) -> Option<YamlToken> {
        match self {
            YamlToken::MappingStart => Some(YamlToken::MappingEnd),
            YamlToken::SequenceStart => Some(YamlToken::SequenceEnd),
            YamlToken::DirectivesEnd => Some(YamlToken::DocumentEnd),
            _ => None,
        }
    }
}

impl Display for YamlToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            YamlToken::Comment => "=COM",
            YamlToken::Tag => "=TAG",
            YamlToken::Directive => "=DIR",
            YamlToken::DirectivesEnd => "+DOC",
            YamlToken::DocumentEnd => "-DOC",
            YamlToken::MappingStart => "+MAP",
            YamlToken::MappingKey => "?KEY",
            YamlToken::MappingEnd => "-MAP",
            YamlToken::SequenceStart => "+SEQ",
            YamlToken::SequenceEnd => "-SEQ",
            YamlToken::SequenceEntry => "?ENT",
            YamlToken::Integer => "=INT",
            YamlToken::Decimal => "=DEC",
            YamlToken::Text => "=TXT",
            YamlToken::Anchor => "=ANC",
            YamlToken::Alias => "=ALI",
            YamlToken::Reserved => "=RES",
            YamlToken::None => "-STR",
        };
        f.write_str(code)
    }
}

#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Marker {
    /// index in bytes of the input string.
    pub pos: usize,
    /// Line of mark. Zero indexed.
    pub line: u32,
    /// Column of mark in bytes. Zero indexed.
    pub col: usize,
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {} (byte {})", self.line + 1, self.col + 1, self.pos)
    }
}
