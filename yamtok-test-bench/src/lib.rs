pub mod consts;

use std::fmt::Write;
use std::sync::Once;

use yamtok::{Reader, Tokenizer};

static TRACING_INIT: Once = Once::new();

/// Installs a `fmt` subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=yamtok=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

///
/// Assert that for given input, the tokenizer generates expected set of tokens
///
/// # Panics
///
///    Function panics if there is a difference between expected tokens string and one generated
///    from the input.
pub fn assert_eq_tokens(input: &str, expected: &str) {
    init_tracing();
    let mut line = String::with_capacity(expected.len());
    let mut tokenizer = Tokenizer::from(input);
    write_str_from_tokens(&mut line, &mut tokenizer);
    pretty_assertions::assert_eq!(line, expected, "Error in case: {input:?}");
}

/// Renders every token on its own line, prefixed by a newline: `=TXT text` for tokens
/// with text, the bare code otherwise. The stream ends with `-STR`, or `ERR` when the
/// tokenizer fails.
///
/// Returns `true` if the tokenizer failed.
pub fn write_str_from_tokens<R: Reader>(line: &mut String, tokenizer: &mut Tokenizer<R>) -> bool {
    for item in tokenizer.tokens() {
        let _ = match item {
            Ok((token, text)) if token.has_lexeme() => write!(line, "\n{token} {text}"),
            Ok((token, _)) => write!(line, "\n{token}"),
            Err(_) => {
                line.push_str("\nERR");
                return true;
            }
        };
    }
    line.push_str("\n-STR");
    false
}
