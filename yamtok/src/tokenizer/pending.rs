use std::collections::VecDeque;
use std::vec::IntoIter;

use tracing::trace;

use yamtok_common::YamlToken;

/// Tokens decided by one scan step, in the order consumers must see them.
#[derive(Clone, Debug, Default)]
pub(crate) struct Batch {
    tokens: Vec<YamlToken>,
}

impl Batch {
    #[inline]
    pub(crate) fn push(&mut self, token: YamlToken) {
        self.tokens.push(token);
    }

    #[inline]
    pub(crate) fn contains(&self, token: YamlToken) -> bool {
        self.tokens.contains(&token)
    }
}

impl Extend<YamlToken> for Batch {
    fn extend<T: IntoIterator<Item = YamlToken>>(&mut self, iter: T) {
        self.tokens.extend(iter);
    }
}

impl IntoIterator for Batch {
    type Item = YamlToken;
    type IntoIter = IntoIter<YamlToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Tokens already decided but not yet delivered. The front is delivered next.
#[derive(Clone, Debug, Default)]
pub(crate) struct PendingTokens {
    queue: VecDeque<YamlToken>,
}

impl PendingTokens {
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<YamlToken> {
        self.queue.pop_front()
    }

    /// Queues `token` ahead of everything already pending.
    #[inline]
    pub(crate) fn push_next(&mut self, token: YamlToken) {
        self.queue.push_front(token);
    }

    /// Queues `batch` ahead of everything already pending, keeping its order, and returns
    /// the token due now. An empty batch with nothing pending yields [`YamlToken::None`].
    pub(crate) fn deliver(&mut self, batch: Batch) -> YamlToken {
        if batch.tokens.len() > 1 {
            trace!(tokens = ?batch.tokens, "deliver batch");
        }
        for token in batch.into_iter().rev() {
            self.queue.push_front(token);
        }
        self.pop().unwrap_or(YamlToken::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_batch_in_order() {
        let mut pending = PendingTokens::default();
        let mut batch = Batch::default();
        batch.extend([
            YamlToken::MappingEnd,
            YamlToken::MappingEnd,
            YamlToken::MappingKey,
            YamlToken::Text,
        ]);
        assert_eq!(pending.deliver(batch), YamlToken::MappingEnd);
        assert_eq!(pending.len(), 3);
        assert_eq!(pending.pop(), Some(YamlToken::MappingEnd));
        assert_eq!(pending.pop(), Some(YamlToken::MappingKey));
        assert_eq!(pending.pop(), Some(YamlToken::Text));
        assert!(pending.is_empty());
    }

    #[test]
    fn batch_goes_ahead_of_pending() {
        let mut pending = PendingTokens::default();
        pending.push_next(YamlToken::Comment);
        let mut batch = Batch::default();
        batch.extend([YamlToken::SequenceStart, YamlToken::SequenceEntry]);
        assert_eq!(pending.deliver(batch), YamlToken::SequenceStart);
        assert_eq!(pending.pop(), Some(YamlToken::SequenceEntry));
        assert_eq!(pending.pop(), Some(YamlToken::Comment));
    }

    #[test]
    fn push_next_jumps_the_queue() {
        let mut pending = PendingTokens::default();
        let mut batch = Batch::default();
        batch.extend([YamlToken::MappingKey, YamlToken::Text]);
        pending.deliver(batch);
        pending.push_next(YamlToken::Tag);
        assert_eq!(pending.pop(), Some(YamlToken::Tag));
        assert_eq!(pending.pop(), Some(YamlToken::Text));
    }

    #[test]
    fn empty_batch_is_none() {
        let mut pending = PendingTokens::default();
        assert_eq!(pending.deliver(Batch::default()), YamlToken::None);
        assert!(!Batch::default().contains(YamlToken::None));
    }
}
