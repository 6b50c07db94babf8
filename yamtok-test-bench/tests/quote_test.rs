use yamtok::{ScalarFault, Tokenizer, YamlError, YamlToken};
use yamtok_test_bench::assert_eq_tokens;
use yamtok_test_bench::consts::*;

#[test]
fn quote_key() {
    assert_eq_tokens(QUOTED_KEY_INPUT, QUOTED_KEY_EVENTS);
}

#[test]
fn quote_escapes_stay_raw() {
    assert_eq_tokens(SINGLE_ESCAPE_INPUT, SINGLE_ESCAPE_EVENTS);
    assert_eq_tokens(DOUBLE_ESCAPE_INPUT, DOUBLE_ESCAPE_EVENTS);
}

#[test]
fn quote_in_flow() {
    assert_eq_tokens(QUOTED_FLOW_INPUT, QUOTED_FLOW_EVENTS);
}

#[test]
fn quote_err() {
    assert_eq_tokens(QUOTE_UNTERMINATED_INPUT, QUOTE_ERR_EVENTS);
    assert_eq_tokens(QUOTE_NEWLINE_INPUT, QUOTE_ERR_EVENTS);
    assert_eq_tokens(QUOTE_TAB_INPUT, QUOTE_ERR_EVENTS);
}

#[test]
fn quote_err_span() {
    let mut tokenizer = Tokenizer::from("x: 'ab\ncd'");
    let mut last = tokenizer.next_token();
    while matches!(last, Ok(token) if token != YamlToken::None) {
        last = tokenizer.next_token();
    }
    match last {
        Err(YamlError::MalformedScalar { span, mark, reason }) => {
            assert_eq!(span, 3..7);
            assert_eq!(mark.col, 3);
            assert_eq!(reason, ScalarFault::ControlByte(b'\n'));
        }
        other => panic!("expected malformed scalar, got {other:?}"),
    }
}

#[test]
fn quote_unterminated_span() {
    let mut tokenizer = Tokenizer::from("\"abc");
    assert_eq!(
        tokenizer.next_token(),
        Err(YamlError::MalformedScalar {
            span: 0..4,
            mark: Default::default(),
            reason: ScalarFault::Unterminated,
        })
    );
}
