//! Shared location primitives used by the lexer, its diagnostics and the logging layer.

pub mod span;

pub use span::{Position, Span};
