pub mod dispatcher;
pub mod reader;
pub mod tokenizer;

pub use dispatcher::Dispatcher;
pub use reader::LineReader;
pub use tokenizer::{tokenize, ArgumentVector};
