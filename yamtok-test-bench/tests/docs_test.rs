use rstest::rstest;
use yamtok_test_bench::assert_eq_tokens;
use yamtok_test_bench::consts::*;

#[rstest]
#[case::docs_multi_doc(MULTI_DOC_INPUT, MULTI_DOC_EVENTS)]
#[case::docs_empty_doc1(EMPTY_DOC1_INPUT, EMPTY_DOC_EVENTS)]
#[case::docs_empty_doc2(EMPTY_DOC2_INPUT, EMPTY_DOC_EVENTS)]
#[case::docs_empty_input(EMPTY_INPUT, EMPTY_EVENTS)]
#[case::docs_blank_input(BLANK_INPUT, EMPTY_EVENTS)]
#[case::docs_footer_only(FOOTER_ONLY_INPUT, FOOTER_ONLY_EVENTS)]
#[case::docs_footer_between(FOOTER_BETWEEN_INPUT, FOOTER_BETWEEN_EVENTS)]
#[case::docs_comment(DOC_COMMENT_INPUT, DOC_COMMENT_EVENTS)]
#[case::docs_not_markers(NOT_MARKERS_INPUT, NOT_MARKERS_EVENTS)]
#[case::docs_restart(DOC_RESTART_INPUT, DOC_RESTART_EVENTS)]
fn run_doc_tests(#[case] input: &str, #[case] expected_events: &str) {
    assert_eq_tokens(input, expected_events);
}

#[rstest]
#[case::docs_err_directive(DIRECTIVE_ERR_INPUT, LEADING_ERR_EVENTS)]
#[case::docs_err_reserved(RESERVED_ERR_INPUT, LEADING_ERR_EVENTS)]
#[case::docs_err_backtick(BACKTICK_ERR_INPUT, LEADING_ERR_EVENTS)]
fn run_doc_err_tests(#[case] input: &str, #[case] expected_events: &str) {
    assert_eq_tokens(input, expected_events);
}
