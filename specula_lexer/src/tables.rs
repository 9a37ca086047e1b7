//! Immutable lexical tables
//!
//! Keyword, delimiter, operator and escape lookups. Everything here is a
//! `match` over constants, so the tables are fixed at compile time and safe
//! to consult from any number of lexers on any thread.
use crate::config::constants::compile_time::lexical::DASH_PREFIXES;
use crate::tokens::TokenKind;

/// Escape character outside the fixed set `' " ? \ a b f n r t v`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Character is not a valid escape char: '{0}'")]
pub struct InvalidEscapeChar(pub char);

/// Characters accepted after a backslash, in table order
pub const ESCAPE_CHARS: [char; 11] = ['\'', '"', '?', '\\', 'a', 'b', 'f', 'n', 'r', 't', 'v'];

/// Characters that force an error inside a string literal
pub const LINE_BREAK_CHARS: [char; 2] = ['\n', '\r'];

/// Case-sensitive keyword lookup
pub fn keyword(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "let" => TokenKind::Let,
        "int" | "float" | "double" | "bool" | "char" | "string" | "str" | "void" => {
            TokenKind::Type
        }

        // Control flow
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "in" => TokenKind::In,
        "break" => TokenKind::Break,
        "return" => TokenKind::Return,

        // Declarations
        "fn" => TokenKind::Fn,
        "struct" => TokenKind::Struct,
        "interface" => TokenKind::Interface,
        "impl" => TokenKind::Impl,
        "self" => TokenKind::SelfValue,
        "this" => TokenKind::This,

        // Modules
        "import" => TokenKind::Import,
        "export" => TokenKind::Export,
        "export_default" => TokenKind::ExportDefault,
        "from" => TokenKind::From,

        // Contracts and listeners
        "contract" => TokenKind::Contract,
        "listener" => TokenKind::Listener,
        "state" => TokenKind::State,
        "init-state" => TokenKind::InitState,
        "fail" => TokenKind::Fail,
        "auto-reset" => TokenKind::AutoReset,
        "auto-move" => TokenKind::AutoMove,
        "to" => TokenKind::To,
        "roles" => TokenKind::Roles,
        "respond" => TokenKind::Respond,
        "on" => TokenKind::On,
        "listen" => TokenKind::Listen,
        "target" => TokenKind::Target,
        "as" => TokenKind::As,
        "using" => TokenKind::Using,
        "after" => TokenKind::After,
        "before" => TokenKind::Before,

        // Concurrency
        "async" => TokenKind::Async,
        "await" => TokenKind::Await,
        "thread" => TokenKind::Thread,
        "spawn" => TokenKind::Spawn,

        // Capabilities
        "own" => TokenKind::Own,
        "move" => TokenKind::Move,
        "shared" => TokenKind::Shared,
        "view" => TokenKind::View,
        "share" => TokenKind::Share,
        "ref" => TokenKind::Ref,
        "mut" => TokenKind::Mut,
        "const" => TokenKind::Const,
        "thread_local" => TokenKind::ThreadLocal,
        "sync" => TokenKind::Sync,
        "infer" => TokenKind::Infer,
        "network" => TokenKind::Network,

        _ => return None,
    };
    Some(kind)
}

/// Every keyword spelling, for exhaustive checks
pub const KEYWORD_SPELLINGS: &[&str] = &[
    "let", "int", "float", "double", "bool", "char", "string", "str", "void", "if", "else", "for",
    "while", "do", "in", "break", "return", "fn", "struct", "interface", "impl", "self", "this",
    "import", "export", "export_default", "from", "contract", "listener", "state", "init-state",
    "fail", "auto-reset", "auto-move", "to", "roles", "respond", "on", "listen", "target", "as",
    "using", "after", "before", "async", "await", "thread", "spawn", "own", "move", "shared",
    "view", "share", "ref", "mut", "const", "thread_local", "sync", "infer", "network",
];

pub fn is_boolean_literal(text: &str) -> bool {
    matches!(text, "true" | "false")
}

/// Whether `text` may be joined to a following word with a dash
pub fn is_dash_prefix(text: &str) -> bool {
    DASH_PREFIXES.contains(&text)
}

/// Single-character delimiter lookup, whitespace included
pub fn delimiter(c: char) -> Option<TokenKind> {
    let kind = match c {
        ' ' => TokenKind::Space,
        '\t' => TokenKind::Tab,
        '\n' | '\r' => TokenKind::NewLine,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '(' => TokenKind::ParenOpen,
        ')' => TokenKind::ParenClose,
        '[' => TokenKind::BracketOpen,
        ']' => TokenKind::BracketClose,
        '{' => TokenKind::BraceOpen,
        '}' => TokenKind::BraceClose,
        ',' => TokenKind::Comma,
        _ => return None,
    };
    Some(kind)
}

pub fn is_delimiter(c: char) -> bool {
    delimiter(c).is_some()
}

pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '=' | '+' | '-' | '*' | '/' | '%' | '.' | '<' | '>' | '&' | '|' | '^' | '!'
    )
}

/// One-character operator token for an operator character
pub fn single_operator(c: char) -> Option<TokenKind> {
    let kind = match c {
        '=' => TokenKind::Equals,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Mult,
        '/' => TokenKind::Divide,
        '%' => TokenKind::Mod,
        '.' => TokenKind::Period,
        '<' => TokenKind::RelLess,
        '>' => TokenKind::RelGreater,
        '&' => TokenKind::BitwAnd,
        '|' => TokenKind::BitwOr,
        '^' => TokenKind::BitwXor,
        '!' => TokenKind::Not,
        _ => return None,
    };
    Some(kind)
}

/// Compound formed by an operator character followed by `=`
pub fn assignment_operator(c: char) -> Option<TokenKind> {
    let kind = match c {
        '=' => TokenKind::RelEq,
        '+' => TokenKind::PlusEq,
        '-' => TokenKind::MinusEq,
        '*' => TokenKind::MultEq,
        '/' => TokenKind::DivEq,
        '%' => TokenKind::ModEq,
        _ => return None,
    };
    Some(kind)
}

/// ASCII letter, digit or underscore
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that can open an identifier: no leading digit
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Decode the character following a backslash
pub fn escape(c: char) -> Result<char, InvalidEscapeChar> {
    let decoded = match c {
        '\'' => '\'',
        '"' => '"',
        '?' => '?',
        '\\' => '\\',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        other => return Err(InvalidEscapeChar(other)),
    };
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_exact() {
        assert_eq!(keyword("let"), Some(TokenKind::Let));
        assert_eq!(keyword("string"), Some(TokenKind::Type));
        assert_eq!(keyword("init-state"), Some(TokenKind::InitState));
        assert_eq!(keyword("Let"), None);
        assert_eq!(keyword("lets"), None);
        assert_eq!(keyword("true"), None);
    }

    #[test]
    fn test_every_spelling_is_a_keyword() {
        for spelling in KEYWORD_SPELLINGS {
            let kind = keyword(spelling).unwrap();
            assert!(kind.is_keyword(), "{} -> {}", spelling, kind);
        }
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(delimiter(';'), Some(TokenKind::Semicolon));
        assert_eq!(delimiter(','), Some(TokenKind::Comma));
        assert_eq!(delimiter('\r'), Some(TokenKind::NewLine));
        assert_eq!(delimiter('@'), None);
        assert!(!is_delimiter('-'));
    }

    #[test]
    fn test_operator_chars_all_have_single_forms() {
        for c in "=+-*/%.<>&|^!".chars() {
            assert!(is_operator_char(c));
            assert!(single_operator(c).is_some());
        }
        assert!(!is_operator_char('@'));
        assert_eq!(assignment_operator('.'), None);
        assert_eq!(assignment_operator('%'), Some(TokenKind::ModEq));
    }

    #[test]
    fn test_escape_table() {
        for c in ESCAPE_CHARS {
            assert!(escape(c).is_ok());
        }
        assert_eq!(escape('n'), Ok('\n'));
        assert_eq!(escape('a'), Ok('\u{07}'));
        assert_eq!(escape('v'), Ok('\u{0B}'));
        assert_eq!(escape('q'), Err(InvalidEscapeChar('q')));
        assert_eq!(escape('0'), Err(InvalidEscapeChar('0')));
    }

    #[test]
    fn test_dash_prefixes() {
        assert!(is_dash_prefix("init"));
        assert!(is_dash_prefix("auto"));
        assert!(!is_dash_prefix("potato"));
    }
}
