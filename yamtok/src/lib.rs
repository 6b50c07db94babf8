pub use tokenizer::{Reader, StrReader, TokenIterator, Tokenizer, TokenizerOptions};
pub use yamtok_common::{
    Marker, ScalarFault, UnsupportedKind, YamlError, YamlResult, YamlToken,
};

pub mod tokenizer;
