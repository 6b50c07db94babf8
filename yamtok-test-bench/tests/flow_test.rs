use yamtok_test_bench::assert_eq_tokens;
use yamtok_test_bench::consts::*;

#[test]
fn flow_seq() {
    assert_eq_tokens(FLOW_SEQ_INPUT, FLOW_SEQ_EVENTS);
    assert_eq_tokens(FLOW_SEQ2_INPUT, FLOW_SEQ_EVENTS);
}

#[test]
fn flow_map() {
    assert_eq_tokens(FLOW_MAP_INPUT, FLOW_MAP_EVENTS);
}

#[test]
fn flow_colon_without_space() {
    assert_eq_tokens(FLOW_COLON_SEQ_INPUT, FLOW_COLON_SEQ_EVENTS);
    assert_eq_tokens(FLOW_COLON_MAP_INPUT, FLOW_COLON_MAP_EVENTS);
}

#[test]
fn flow_in_block() {
    assert_eq_tokens(FLOW_IN_BLOCK_INPUT, FLOW_IN_BLOCK_EVENTS);
    assert_eq_tokens(FLOW_IN_SEQ_INPUT, FLOW_IN_SEQ_EVENTS);
}

#[test]
fn flow_nested() {
    assert_eq_tokens(NESTED_FLOW_INPUT, NESTED_FLOW_EVENTS);
    assert_eq_tokens(FLOW_CLOSE_INNER_INPUT, FLOW_CLOSE_INNER_EVENTS);
}

#[test]
fn flow_err_closer() {
    assert_eq_tokens(FLOW_ERR_CLOSER_INPUT, FLOW_ERR_CLOSER_EVENTS);
    assert_eq_tokens(FLOW_ERR_STRAY_INPUT, FLOW_ERR_STRAY_EVENTS);
}
