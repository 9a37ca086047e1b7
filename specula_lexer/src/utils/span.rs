//! Source location tracking
//!
//! Lines are supplied by whoever feeds the lexer (1-based when a file is fed
//! line by line). Character positions are 0-based offsets counted in `char`s
//! within a single `feed` call, which is what diagnostics and tokens report.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in fed text: caller-supplied line plus 0-based character offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number as passed to `feed`
    pub line: u32,
    /// Character offset within the fed text (0-based)
    pub char_pos: usize,
}

impl Position {
    pub fn new(line: u32, char_pos: usize) -> Self {
        Self { line, char_pos }
    }

    /// Move forward by `n` characters on the same line
    pub fn advance(self, n: usize) -> Self {
        Self {
            line: self.line,
            char_pos: self.char_pos + n,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.char_pos)
    }
}

/// A half-open range of characters on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "Span start must not be after end");
        Self { start, end }
    }

    /// Span covering `[start, end)` on `line`
    pub fn on_line(line: u32, start: usize, end: usize) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    /// Create a single-character span
    pub fn single(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos.advance(1),
        }
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Number of characters covered, zero when the span crosses lines
    pub fn len(&self) -> usize {
        if self.start.line == self.end.line {
            self.end.char_pos.saturating_sub(self.start.char_pos)
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Slice the covered characters out of the text that produced this span
    pub fn slice<'a>(&self, line_text: &'a str) -> Option<&'a str> {
        let mut indices = line_text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(line_text.len()));
        let start = indices.nth(self.start.char_pos)?;
        let end = if self.is_empty() {
            start
        } else {
            let mut rest = line_text[start..]
                .char_indices()
                .map(|(offset, _)| start + offset)
                .chain(std::iter::once(line_text.len()));
            rest.nth(self.len())?
        };
        line_text.get(start..end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.char_pos, self.end.char_pos
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
