use std::ops::Range;

use thiserror::Error;

use crate::{Marker, YamlToken};

/// A specialized `Result` type where the error is hard-wired to [`YamlError`].
pub type YamlResult<T> = Result<T, YamlError>;

/// Why a quoted scalar was rejected.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScalarFault {
    /// A raw byte below `0x20` appeared between the quotes.
    ControlByte(u8),
    /// Input ended before the closing quote.
    Unterminated,
}

/// Constructs the tokenizer recognizes but deliberately does not implement.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UnsupportedKind {
    /// `|` block scalar
    LiteralScalar,
    /// `>` block scalar
    FoldedScalar,
    /// `%` directive
    Directive,
    /// `@` or `` ` ``
    Reserved(char),
}

impl UnsupportedKind {
    /// Token the construct would produce once supported.
    #[must_use]
    pub const fn token(self) -> YamlToken {
        match self {
            UnsupportedKind::LiteralScalar | UnsupportedKind::FoldedScalar => YamlToken::Text,
            UnsupportedKind::Directive => YamlToken::Directive,
            UnsupportedKind::Reserved(_) => YamlToken::Reserved,
        }
    }
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum YamlError {
    /// Quoted scalar with a control byte or without a closing quote.
    #[error("malformed quoted scalar at {mark} (bytes {span:?}): {reason:?}")]
    MalformedScalar {
        span: Range<usize>,
        mark: Marker,
        reason: ScalarFault,
    },
    /// `]` or `}` without an open collection of the same kind.
    #[error("unexpected `{found}` at {mark}, no matching collection is open")]
    UnbalancedCloser { found: char, mark: Marker },
    /// A context frame held a token that can't be closed. Points to a bug, not to bad input.
    #[error("invalid context {context:?} at {mark}")]
    InvalidContext { context: YamlToken, mark: Marker },
    #[error("{kind:?} at {mark} is not supported")]
    Unsupported { kind: UnsupportedKind, mark: Marker },
    /// Extracted bytes are not valid UTF-8.
    #[error("bytes {span:?} are not valid UTF-8")]
    NonDecodable { span: Range<usize> },
}

impl YamlError {
    /// Position the error was raised at, when it has one.
    #[must_use]
    pub fn marker(&self) -> Option<Marker> {
        match self {
            YamlError::MalformedScalar { mark, .. }
            | YamlError::UnbalancedCloser { mark, .. }
            | YamlError::InvalidContext { mark, .. }
            | YamlError::Unsupported { mark, .. } => Some(*mark),
            YamlError::NonDecodable { .. } => None,
        }
    }
}
