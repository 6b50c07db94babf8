use std::iter::FusedIterator;

use yamtok_common::{YamlResult, YamlToken};

use crate::tokenizer::{Reader, Tokenizer};

/// Iterator over tokens and their text.
///
/// Ends before [`YamlToken::None`]. An error is yielded once, then the iterator stops.
pub struct TokenIterator<'t, R> {
    tokenizer: &'t mut Tokenizer<R>,
    done: bool,
}

impl<'t, R: Reader> TokenIterator<'t, R> {
    pub(crate) fn new(tokenizer: &'t mut Tokenizer<R>) -> Self {
        TokenIterator {
            tokenizer,
            done: false,
        }
    }
}

impl<'t, R: Reader> Iterator for TokenIterator<'t, R> {
    type Item = YamlResult<(YamlToken, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = match self.tokenizer.next_token() {
            Ok(YamlToken::None) => {
                self.done = true;
                return None;
            }
            Ok(token) => token,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        let text = self.tokenizer.text().map(str::to_owned);
        if text.is_err() {
            self.done = true;
        }
        Some(text.map(|text| (token, text)))
    }
}

impl<'t, R: Reader> FusedIterator for TokenIterator<'t, R> {}

#[cfg(test)]
mod tests {
    use crate::{Tokenizer, YamlError, YamlToken};

    #[test]
    fn pairs_tokens_with_text() {
        let mut tokenizer = Tokenizer::from("- &a x\n- *a\n");
        let tokens: Vec<_> = tokenizer.tokens().collect::<Result<_, _>>().unwrap();
        assert_eq!(
            tokens,
            vec![
                (YamlToken::DirectivesEnd, String::new()),
                (YamlToken::SequenceStart, String::new()),
                (YamlToken::SequenceEntry, String::new()),
                (YamlToken::Anchor, "a".to_owned()),
                (YamlToken::Text, "x".to_owned()),
                (YamlToken::SequenceEntry, String::new()),
                (YamlToken::Alias, "a".to_owned()),
                (YamlToken::SequenceEnd, String::new()),
                (YamlToken::DocumentEnd, String::new()),
            ]
        );
    }

    #[test]
    fn stops_after_undecodable_text() {
        let input: &[u8] = b"\xff\xfe\n";
        let mut tokenizer = Tokenizer::from(input);
        let mut tokens = tokenizer.tokens();
        assert_eq!(
            tokens.next(),
            Some(Err(YamlError::NonDecodable { span: 0..2 }))
        );
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }
}
