use serde::Serialize;
use std::fmt;

/// Machine states; exactly one is current at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LexerState {
    #[default]
    Start,
    Delimiter,
    ExpectDelimiter,

    Identifier,
    IdentifierDash,

    NumStart,
    DecimalReached,
    Float,

    CharStart,
    CharEscape,
    CharEnd,

    StringStart,
    String,
    StringEscape,

    Op,
    OpEqualsNext,
    OpIncrementable,
    OpLogical,
    OpMinus,
    OpLessThan,
    OpGreaterThan,
    OpLeftArrow,
    CharSlash,

    Comment,
    MultilineComment,
    MultilineCommentEnd,

    Invalid,
}

impl LexerState {
    pub fn as_str(self) -> &'static str {
        match self {
            LexerState::Start => "START",
            LexerState::Delimiter => "DELIMETER",
            LexerState::ExpectDelimiter => "EXPECT_DELIMETER",
            LexerState::Identifier => "IDENTIFIER",
            LexerState::IdentifierDash => "IDENTIFIER_DASH",
            LexerState::NumStart => "NUM_START",
            LexerState::DecimalReached => "DECIMAL_REACHED",
            LexerState::Float => "FLOAT",
            LexerState::CharStart => "CHAR_START",
            LexerState::CharEscape => "CHAR_ESCAPE_CHAR",
            LexerState::CharEnd => "CHAR_END",
            LexerState::StringStart => "STRING_START",
            LexerState::String => "STRING",
            LexerState::StringEscape => "STRING_ESCAPE_CHAR",
            LexerState::Op => "OP",
            LexerState::OpEqualsNext => "OP_EQUALS_NEXT",
            LexerState::OpIncrementable => "OP_INCREMENTABLE",
            LexerState::OpLogical => "OP_LOGICAL",
            LexerState::OpMinus => "OP_MINUS",
            LexerState::OpLessThan => "OP_LESS_THAN",
            LexerState::OpGreaterThan => "OP_GREATER_THAN",
            LexerState::OpLeftArrow => "OP_LEFT_ARROW",
            LexerState::CharSlash => "CHAR_SLASH",
            LexerState::Comment => "COMMENT",
            LexerState::MultilineComment => "MULTILINE_COMMENT",
            LexerState::MultilineCommentEnd => "MULTILINE_COMMENT_END",
            LexerState::Invalid => "INVALID",
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            LexerState::Comment | LexerState::MultilineComment | LexerState::MultilineCommentEnd
        )
    }

    pub fn is_block_comment(self) -> bool {
        matches!(
            self,
            LexerState::MultilineComment | LexerState::MultilineCommentEnd
        )
    }

    /// States that only end at a closing quote
    pub fn is_quoted_literal(self) -> bool {
        matches!(
            self,
            LexerState::CharStart
                | LexerState::CharEscape
                | LexerState::CharEnd
                | LexerState::StringStart
                | LexerState::String
                | LexerState::StringEscape
        )
    }
}

impl fmt::Display for LexerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one dispatch for the current character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The character was used; advance to the next one
    Consume,
    /// The state changed; dispatch the same character again
    Reprocess,
}
