//! Diagnostic records and the errors a `feed` call can return
//!
//! Recoverable problems are recorded as [`Diagnostic`]s and lexing resumes at
//! the next delimiter. Literals and comments that can no longer be closed end
//! the call with [`LexerError::Terminal`].

use super::state::LexerState;
use crate::config::compile_time::lexical::MAX_REPROCESS_DEPTH;
use crate::logging::codes::{self, Code};
use crate::utils::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    UnrecognizedCharacter,
    /// An operator sub-state was entered with a pending lexeme of the wrong length
    MalformedOperatorSequence,
    UnterminatedCharLiteral,
    UnterminatedStringLiteral,
    InvalidEscapeSequence,
    /// Decimal literal ending in a bare `.`
    UnterminatedDoubleLiteral,
    BadFloatSuffix,
    UnrecognizedNumericContinuation,
    EmptyCharLiteral,
    CharLiteralTooLong,
    NewlineInStringLiteral,
    UnterminatedBlockComment,
    LexemeTooLong,
}

impl DiagnosticKind {
    pub fn code(self) -> Code {
        use codes::lexical::*;
        match self {
            DiagnosticKind::UnrecognizedCharacter => UNRECOGNIZED_CHARACTER,
            DiagnosticKind::MalformedOperatorSequence => MALFORMED_OPERATOR,
            DiagnosticKind::UnterminatedCharLiteral => UNTERMINATED_CHAR,
            DiagnosticKind::UnterminatedStringLiteral => UNTERMINATED_STRING,
            DiagnosticKind::InvalidEscapeSequence => INVALID_ESCAPE,
            DiagnosticKind::UnterminatedDoubleLiteral => UNTERMINATED_DOUBLE,
            DiagnosticKind::BadFloatSuffix => BAD_FLOAT_SUFFIX,
            DiagnosticKind::UnrecognizedNumericContinuation => BAD_NUMERIC_CONTINUATION,
            DiagnosticKind::EmptyCharLiteral => EMPTY_CHAR,
            DiagnosticKind::CharLiteralTooLong => CHAR_TOO_LONG,
            DiagnosticKind::NewlineInStringLiteral => NEWLINE_IN_STRING,
            DiagnosticKind::UnterminatedBlockComment => UNTERMINATED_BLOCK_COMMENT,
            DiagnosticKind::LexemeTooLong => LEXEME_TOO_LONG,
        }
    }

    /// Kinds that end a `feed` call rather than resynchronizing
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            DiagnosticKind::UnterminatedCharLiteral
                | DiagnosticKind::UnterminatedStringLiteral
                | DiagnosticKind::UnterminatedBlockComment
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: u32,
    /// 0-based character offset within the `feed` call
    pub char_pos: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, at: Position) -> Self {
        Self {
            kind,
            message: message.into(),
            line: at.line,
            char_pos: at.char_pos,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.char_pos)
    }

    pub fn code(&self) -> Code {
        self.kind.code()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}:{}", self.message, self.line, self.char_pos)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("{0}")]
    Terminal(Diagnostic),

    #[error(
        "Reprocess limit of {} exceeded in state {state} for {character:?} at line {line}:{char_pos}",
        MAX_REPROCESS_DEPTH
    )]
    ReprocessLimit {
        state: LexerState,
        character: char,
        line: u32,
        char_pos: usize,
    },
}

impl LexerError {
    pub fn line(&self) -> u32 {
        match self {
            LexerError::Terminal(diagnostic) => diagnostic.line,
            LexerError::ReprocessLimit { line, .. } => *line,
        }
    }

    pub fn char_pos(&self) -> usize {
        match self {
            LexerError::Terminal(diagnostic) => diagnostic.char_pos,
            LexerError::ReprocessLimit { char_pos, .. } => *char_pos,
        }
    }

    /// Message without the position suffix
    pub fn message(&self) -> String {
        match self {
            LexerError::Terminal(diagnostic) => diagnostic.message.clone(),
            LexerError::ReprocessLimit { state, character, .. } => format!(
                "Reprocess limit exceeded in state {} for {:?}",
                state, character
            ),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            LexerError::Terminal(diagnostic) => diagnostic.code(),
            LexerError::ReprocessLimit { .. } => codes::system::INTERNAL_ERROR,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            LexerError::Terminal(diagnostic) => Some(diagnostic),
            LexerError::ReprocessLimit { .. } => None,
        }
    }
}
