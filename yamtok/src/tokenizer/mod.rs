pub use iterator::TokenIterator;
pub use reader::Reader;
pub use scanner::{Tokenizer, TokenizerOptions};
pub use str_reader::StrReader;

mod char_utils;
mod context;
mod iterator;
mod pending;
mod reader;
mod scanner;
mod str_reader;
