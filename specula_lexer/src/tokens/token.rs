use super::TokenKind;
use crate::utils::{Position, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A classified token with its decoded text and location
///
/// `text` holds the decoded lexeme: escapes inside char and string literals
/// are already resolved, punctuation and operators keep their source
/// spelling. Positions are character offsets within the `feed` call that
/// produced the token; `char_end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub char_start: usize,
    pub char_end: usize,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        line: u32,
        char_start: usize,
        char_end: usize,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            char_start,
            char_end,
        }
    }

    pub fn start(&self) -> Position {
        Position::new(self.line, self.char_start)
    }

    pub fn span(&self) -> Span {
        Span::on_line(self.line, self.char_start, self.char_end)
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// `KIND | text`, the line format of plain token dumps
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.kind, self.text)
    }
}
