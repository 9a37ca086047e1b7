//! Closed set of token kinds with their stable wire names
//!
//! The wire name (`L_INT`, `K_LET`, `OP_DECR`, ...) is what token dumps and
//! JSON payloads carry, so it doubles as the serde representation.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! token_kinds {
    ($( $(#[$meta:meta])* $variant:ident => $wire:literal, )+) => {
        /// Every kind of token the lexer can produce
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenKind {
            $( $(#[$meta])* $variant, )+
        }

        impl TokenKind {
            /// All kinds in declaration order
            pub const ALL: &'static [TokenKind] = &[ $( TokenKind::$variant, )+ ];

            /// Wire name used in dumps and payloads
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $wire, )+
                }
            }

            /// Look a kind up by its wire name
            pub fn from_wire_name(name: &str) -> Option<Self> {
                match name {
                    $( $wire => Some(TokenKind::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    // === LITERALS ===
    LiteralInt => "L_INT",
    LiteralFloat => "L_FLOAT",
    LiteralDouble => "L_DOUBLE",
    LiteralChar => "L_CHAR",
    LiteralString => "L_STRING",
    LiteralBool => "L_BOOL",

    // === KEYWORDS ===
    Let => "K_LET",
    /// Any built-in type name (`int`, `string`, `void`, ...)
    Type => "K_TYPE",
    If => "K_IF",
    Else => "K_ELSE",
    For => "K_FOR",
    While => "K_WHILE",
    Do => "K_DO",
    In => "K_IN",
    Break => "K_BREAK",
    Return => "K_RET",
    Fn => "K_FN",
    Struct => "K_STRUCT",
    Interface => "K_INTERFACE",
    Impl => "K_IMPL",
    SelfValue => "K_SELF",
    This => "K_THIS",
    Import => "K_IMPORT",
    Export => "K_EXPORT",
    ExportDefault => "K_EXPORT_DEFAULT",
    From => "K_FROM",
    Contract => "K_CONTRACT",
    Listener => "K_LISTENER",
    State => "K_STATE",
    InitState => "K_INIT_STATE",
    Fail => "K_FAIL",
    AutoReset => "K_AUTO_RESET",
    AutoMove => "K_AUTO_MOVE",
    To => "K_TO",
    Roles => "K_ROLES",
    Respond => "K_RESPOND",
    On => "K_ON",
    Listen => "K_LISTEN",
    Target => "K_TARGET",
    As => "K_AS",
    Using => "K_USING",
    After => "K_AFTER",
    Before => "K_BEFORE",
    Async => "K_ASYNC",
    Await => "K_AWAIT",
    Thread => "K_THREAD",
    Spawn => "K_SPAWN",
    Own => "K_OWN",
    Move => "K_MOVE",
    Shared => "K_SHARED",
    View => "K_VIEW",
    Share => "K_SHARE",
    Ref => "K_REF",
    Mut => "K_MUT",
    Const => "K_CONST",
    ThreadLocal => "K_THR_LOCAL",
    Sync => "K_SYNC",
    Infer => "K_INFER",
    Network => "K_NETWORK",

    // === OPERATORS ===
    Equals => "OP_EQUALS",
    Plus => "OP_PLUS",
    Minus => "OP_MINUS",
    Mult => "OP_MULT",
    Divide => "OP_DIVIDE",
    Mod => "OP_MOD",
    Period => "OP_PERIOD",
    RelEq => "OP_REL_EQ",
    RelLessEq => "OP_REL_LESS_EQ",
    RelGreaterEq => "OP_REL_GREATER_EQ",
    RelLess => "OP_REL_LESS",
    RelGreater => "OP_REL_GREATER",
    PlusEq => "OP_PLUS_EQ",
    MinusEq => "OP_MINUS_EQ",
    MultEq => "OP_MULT_EQ",
    DivEq => "OP_DIV_EQ",
    ModEq => "OP_MOD_EQ",
    And => "OP_AND",
    Or => "OP_OR",
    Not => "OP_NOT",
    BitwAnd => "OP_BITW_AND",
    BitwOr => "OP_BITW_OR",
    BitwXor => "OP_BITW_XOR",
    ShiftL => "OP_SHIFT_L",
    ShiftR => "OP_SHIFT_R",
    /// `<-`
    LeftArrow => "OP_LEFT_OP",
    /// `->`
    RightArrow => "OP_RIGHT_OP",
    /// `<->`
    Bidirectional => "OP_BIDIR_OP",
    Increment => "OP_INCR",
    Decrement => "OP_DECR",

    // === DELIMITERS ===
    ParenOpen => "D_PAR_OP",
    ParenClose => "D_PAR_CLO",
    BracketOpen => "D_BRAC_OP",
    BracketClose => "D_BRAC_CLO",
    BraceOpen => "D_CBRAC_OP",
    BraceClose => "D_CBRAC_CLO",
    Colon => "D_COLON",
    Semicolon => "D_SEMICOLON",
    Comma => "COMMA",

    // === OTHER ===
    Identifier => "IDENT",
    /// Text absorbed while resynchronizing after a diagnostic
    Unknown => "UNKNOWN",

    // Internal markers, never emitted
    NewLine => "NEW_LINE",
    Space => "SPACE",
    Tab => "TAB",
}

/// Coarse grouping of token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Literal,
    Keyword,
    Operator,
    Delimiter,
    Identifier,
    /// Whitespace markers, recognized but never emitted
    Whitespace,
    Unknown,
}

impl TokenKind {
    pub fn token_class(self) -> TokenClass {
        use TokenKind::*;
        match self {
            LiteralInt | LiteralFloat | LiteralDouble | LiteralChar | LiteralString
            | LiteralBool => TokenClass::Literal,

            Equals | Plus | Minus | Mult | Divide | Mod | Period | RelEq | RelLessEq
            | RelGreaterEq | RelLess | RelGreater | PlusEq | MinusEq | MultEq | DivEq | ModEq
            | And | Or | Not | BitwAnd | BitwOr | BitwXor | ShiftL | ShiftR | LeftArrow
            | RightArrow | Bidirectional | Increment | Decrement => TokenClass::Operator,

            ParenOpen | ParenClose | BracketOpen | BracketClose | BraceOpen | BraceClose
            | Colon | Semicolon | Comma => TokenClass::Delimiter,

            Identifier => TokenClass::Identifier,
            Unknown => TokenClass::Unknown,
            NewLine | Space | Tab => TokenClass::Whitespace,

            _ => TokenClass::Keyword,
        }
    }

    pub fn is_keyword(self) -> bool {
        self.token_class() == TokenClass::Keyword
    }

    pub fn is_operator(self) -> bool {
        self.token_class() == TokenClass::Operator
    }

    pub fn is_literal(self) -> bool {
        self.token_class() == TokenClass::Literal
    }

    pub fn is_delimiter(self) -> bool {
        self.token_class() == TokenClass::Delimiter
    }

    /// Whether tokens of this kind can appear in `Lexer::tokens()`
    pub fn is_emitted(self) -> bool {
        self.token_class() != TokenClass::Whitespace
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a wire name does not name any token kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown token kind: '{0}'")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire_name(s).ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TokenKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_unique_and_parse_back() {
        let mut seen = std::collections::HashSet::new();
        for kind in TokenKind::ALL {
            assert!(seen.insert(kind.as_str()), "duplicate wire name {}", kind);
            assert_eq!(kind.as_str().parse::<TokenKind>(), Ok(*kind));
        }
    }

    #[test]
    fn test_classification() {
        assert!(TokenKind::InitState.is_keyword());
        assert!(TokenKind::Type.is_keyword());
        assert!(TokenKind::Bidirectional.is_operator());
        assert!(TokenKind::LiteralBool.is_literal());
        assert!(TokenKind::Comma.is_delimiter());
        assert!(!TokenKind::Space.is_emitted());
        assert!(!TokenKind::NewLine.is_emitted());
        assert!(TokenKind::Unknown.is_emitted());
        assert_eq!(TokenKind::Identifier.token_class(), TokenClass::Identifier);
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&TokenKind::Decrement).unwrap();
        assert_eq!(json, "\"OP_DECR\"");
        let kind: TokenKind = serde_json::from_str("\"K_THR_LOCAL\"").unwrap();
        assert_eq!(kind, TokenKind::ThreadLocal);
        assert!(serde_json::from_str::<TokenKind>("\"K_NOPE\"").is_err());
    }
}
