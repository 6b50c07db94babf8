use proptest::prelude::*;
use yamtok::{Tokenizer, YamlResult, YamlToken};

const MAX_TOKENS: usize = 100_000;

/// Tokens until the end of input, or the first error.
fn drain(input: &str) -> YamlResult<Vec<YamlToken>> {
    let mut tokenizer = Tokenizer::from(input);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        tokens.push(token);
        if token == YamlToken::None {
            return Ok(tokens);
        }
        assert!(tokens.len() < MAX_TOKENS, "no end of input for {input:?}");
    }
}

fn count(tokens: &[YamlToken], needle: YamlToken) -> usize {
    tokens.iter().filter(|t| **t == needle).count()
}

proptest! {
    #[test]
    fn structures_are_balanced(input in "[a-z0-9 :#,&*!?'\"\\[\\]{}\\-\n]{0,64}") {
        if let Ok(tokens) = drain(&input) {
            prop_assert_eq!(count(&tokens, YamlToken::MappingStart), count(&tokens, YamlToken::MappingEnd));
            prop_assert_eq!(count(&tokens, YamlToken::SequenceStart), count(&tokens, YamlToken::SequenceEnd));
            prop_assert_eq!(count(&tokens, YamlToken::DirectivesEnd), count(&tokens, YamlToken::DocumentEnd));
        }
    }

    #[test]
    fn structural_tokens_have_no_text(input in "[a-z0-9 :,&*!?\\[\\]{}\\-\n]{0,64}") {
        let mut tokenizer = Tokenizer::from(&*input);
        for _ in 0..MAX_TOKENS {
            match tokenizer.next_token() {
                Ok(YamlToken::None) | Err(_) => break,
                Ok(token) if !token.has_lexeme() => {
                    prop_assert_eq!(tokenizer.text(), Ok(""));
                }
                Ok(_) => {}
            }
        }
    }

    #[test]
    fn end_of_input_repeats(input in "[a-z :\\-\n]{0,32}") {
        let mut tokenizer = Tokenizer::from(&*input);
        let mut steps = 0;
        while tokenizer.next_token() != Ok(YamlToken::None) {
            steps += 1;
            prop_assert!(steps < MAX_TOKENS);
        }
        prop_assert_eq!(tokenizer.next_token(), Ok(YamlToken::None));
        prop_assert_eq!(tokenizer.depth(), 0);
    }

    #[test]
    fn colon_without_space_stays_in_text(word in "[a-z]{1,8}:[a-z]{1,8}") {
        let mut tokenizer = Tokenizer::from(&*word);
        prop_assert_eq!(tokenizer.next_token(), Ok(YamlToken::Text));
        prop_assert_eq!(tokenizer.text(), Ok(&*word));
        prop_assert_eq!(tokenizer.next_token(), Ok(YamlToken::None));
    }

    #[test]
    fn colon_without_space_stays_in_flow_text(word in "[a-z]{1,8}:[a-z]{1,8}") {
        let input = format!("[{word}]\n");
        let mut tokenizer = Tokenizer::from(&*input);
        prop_assert_eq!(tokenizer.next_token(), Ok(YamlToken::DirectivesEnd));
        prop_assert_eq!(tokenizer.next_token(), Ok(YamlToken::SequenceStart));
        prop_assert_eq!(tokenizer.next_token(), Ok(YamlToken::Text));
        prop_assert_eq!(tokenizer.text(), Ok(&*word));
        prop_assert_eq!(tokenizer.next_token(), Ok(YamlToken::SequenceEnd));
        prop_assert_eq!(tokenizer.next_token(), Ok(YamlToken::DocumentEnd));
        prop_assert_eq!(tokenizer.next_token(), Ok(YamlToken::None));
    }

    #[test]
    fn colon_space_makes_key(key in "[a-z]{1,8}", value in "[a-z]{1,8}") {
        let input = format!("{key}: {value}\n");
        let tokens = drain(&input);
        prop_assert_eq!(tokens, Ok(vec![
            YamlToken::DirectivesEnd,
            YamlToken::MappingStart,
            YamlToken::MappingKey,
            YamlToken::Text,
            YamlToken::Text,
            YamlToken::MappingEnd,
            YamlToken::DocumentEnd,
            YamlToken::None,
        ]));
    }
}
