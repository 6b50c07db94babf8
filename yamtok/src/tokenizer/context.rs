use tracing::trace;

use yamtok_common::{Marker, YamlError, YamlResult, YamlToken};

use super::pending::Batch;

/// Open structure and the indentation rank it was opened at.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Frame {
    pub(crate) kind: YamlToken,
    pub(crate) indent: usize,
}

/// Structures the scanner nests. Only used while resolving nesting, consumers see
/// the [`YamlToken`]s they map to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Structure {
    /// `key: value` lines
    BlockMapping,
    /// `- entry` lines
    BlockSequence,
    /// `{ ... }`
    FlowMapping,
    /// `[ ... ]`
    FlowSequence,
}

impl Structure {
    #[inline]
    pub(crate) const fn start_token(self) -> YamlToken {
        match self {
            Structure::BlockMapping | Structure::FlowMapping => YamlToken::MappingStart,
            Structure::BlockSequence | Structure::FlowSequence => YamlToken::SequenceStart,
        }
    }

    #[inline]
    pub(crate) const fn entry_token(self) -> YamlToken {
        match self {
            Structure::BlockMapping | Structure::FlowMapping => YamlToken::MappingKey,
            Structure::BlockSequence | Structure::FlowSequence => YamlToken::SequenceEntry,
        }
    }

    #[inline]
    pub(crate) const fn closer(self) -> char {
        match self {
            Structure::BlockMapping | Structure::FlowMapping => '}',
            Structure::BlockSequence | Structure::FlowSequence => ']',
        }
    }

    /// Rank of a structure starting at column `col`.
    ///
    /// Block sequences rank one above mappings at the same column, so
    /// ```yaml
    /// key:
    /// - entry
    /// ```
    /// nests the sequence inside `key`.
    #[inline]
    pub(crate) const fn rank(self, col: usize) -> usize {
        match self {
            Structure::BlockMapping => col.saturating_mul(2).saturating_add(1),
            Structure::BlockSequence => col.saturating_mul(2).saturating_add(2),
            Structure::FlowMapping | Structure::FlowSequence => col,
        }
    }
}

/// Stack of open structures. Frame 0 always exists and starts as `{None, 0}`.
#[derive(Clone, Debug)]
pub(crate) struct ContextStack {
    frames: Vec<Frame>,
    /// Depth of the frame that switched to flow rules.
    flow_depth: Option<usize>,
}

impl ContextStack {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut frames = Vec::with_capacity(capacity.max(1));
        frames.push(Frame {
            kind: YamlToken::None,
            indent: 0,
        });
        ContextStack {
            frames,
            flow_depth: None,
        }
    }

    /// Index of the top frame.
    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    #[inline]
    fn top(&self) -> &Frame {
        &self.frames[self.depth()]
    }

    #[inline]
    pub(crate) fn kind(&self) -> YamlToken {
        self.top().kind
    }

    #[inline]
    pub(crate) fn indent(&self) -> usize {
        self.top().indent
    }

    pub(crate) fn set_kind(&mut self, kind: YamlToken) {
        let depth = self.depth();
        self.frames[depth].kind = kind;
    }

    #[inline]
    pub(crate) fn in_flow(&self) -> bool {
        self.flow_depth.map_or(false, |flow| self.depth() >= flow)
    }

    /// Opens a frame. The first structure of a document implicitly opens the document,
    /// which queues a [`YamlToken::DirectivesEnd`].
    pub(crate) fn push(&mut self, kind: YamlToken, indent: usize, out: &mut Batch) {
        if self.kind() == YamlToken::None && kind != YamlToken::DirectivesEnd {
            self.push_frame(YamlToken::DirectivesEnd, 0);
            out.push(YamlToken::DirectivesEnd);
        }
        self.push_frame(kind, indent);
    }

    /// Opens a flow collection frame and switches to flow rules if they aren't active yet.
    pub(crate) fn push_flow(&mut self, kind: YamlToken, indent: usize, out: &mut Batch) {
        self.push(kind, indent, out);
        if self.flow_depth.is_none() {
            trace!(depth = self.depth(), "flow collection starts");
            self.flow_depth = Some(self.depth());
        }
    }

    fn push_frame(&mut self, kind: YamlToken, indent: usize) {
        self.frames.push(Frame { kind, indent });
        trace!(?kind, indent, depth = self.depth(), "push context");
    }

    /// Closes the top frame and queues its closing token. The root frame is never removed.
    pub(crate) fn pop(&mut self, out: &mut Batch, mark: Marker) -> YamlResult<()> {
        if self.depth() == 0 {
            return Ok(());
        }
        let frame = *self.top();
        match frame.kind {
            YamlToken::None => {}
            kind => match kind.closing() {
                Some(closing) => out.push(closing),
                None => {
                    return Err(YamlError::InvalidContext {
                        context: kind,
                        mark,
                    })
                }
            },
        }
        self.frames.pop();
        trace!(kind = ?frame.kind, depth = self.depth(), "pop context");
        if matches!(self.flow_depth, Some(flow) if self.depth() < flow) {
            trace!("flow collection ends");
            self.flow_depth = None;
        }
        Ok(())
    }

    /// Closes every frame above the root and resets the root to `None`.
    pub(crate) fn unwind(&mut self, out: &mut Batch, mark: Marker) -> YamlResult<()> {
        while self.depth() > 0 {
            self.pop(out, mark)?;
        }
        self.set_kind(YamlToken::None);
        Ok(())
    }

    /// Depth of the innermost frame of `kind` above the root.
    pub(crate) fn find(&self, kind: YamlToken) -> Option<usize> {
        self.frames
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, frame)| frame.kind == kind)
            .map(|(depth, _)| depth)
    }
}
