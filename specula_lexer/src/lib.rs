// Internal modules
pub mod config;
pub mod file_processor;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod output;
pub mod tables;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use config::{LexicalPreferences, OutputFormat, RuntimeConfig};
pub use file_processor::{read_into, FileProcessor, FileProcessorError, ReadReport};
pub use lexical::{
    feed_source, feed_source_recovering, tokenize, tokenize_source, Diagnostic, DiagnosticKind,
    Lexer, LexerError, LexerState,
};
pub use output::{OutputError, TokensPayload};
pub use tokens::{Token, TokenKind};
