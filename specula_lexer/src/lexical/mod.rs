//! Lexical analysis: the state machine core and its driver
//!
//! [`Lexer`] is the stateful tokenizer. The free functions below cover the
//! common one-shot cases.

pub mod analyzer;
pub mod diagnostics;
pub mod state;

use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::Token;

pub use analyzer::{Lexer, LexicalMetrics};
pub use diagnostics::{Diagnostic, DiagnosticKind, LexerError};
pub use state::{LexerState, Step};

/// Tokenize `text` as a single line numbered 1
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexerError> {
    let mut lexer = Lexer::new();
    lexer.feed(text, 1)?;
    Ok(lexer.take_tokens())
}

/// Feed `source` line by line (1-based) into `lexer`, then finish it
pub fn feed_source(lexer: &mut Lexer, source: &str) -> Result<(), LexerError> {
    for (index, line) in source.lines().enumerate() {
        lexer.feed(line, line_number(index))?;
    }
    lexer.finish()
}

/// Feed `source` like [`feed_source`], but keep going after a terminal
/// error: the failing line is abandoned and the next line starts from START.
/// Returns every terminal error in source order.
pub fn feed_source_recovering(lexer: &mut Lexer, source: &str) -> Vec<LexerError> {
    let mut errors = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Err(error) = lexer.feed(line, line_number(index)) {
            errors.push(error);
        }
    }
    if let Err(error) = lexer.finish() {
        errors.push(error);
    }
    errors
}

/// Tokenize a whole multi-line source with the given preferences
pub fn tokenize_source(
    source: &str,
    preferences: LexicalPreferences,
) -> Result<Vec<Token>, LexerError> {
    let mut lexer = Lexer::with_preferences(preferences);
    feed_source(&mut lexer, source)?;
    Ok(lexer.take_tokens())
}

/// 1-based line number for a 0-based line index
pub(crate) fn line_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// Startup check that every diagnostic kind maps to a registered code
pub fn validate_lexical_codes() -> Result<(), String> {
    let lexical_codes = [
        codes::lexical::UNRECOGNIZED_CHARACTER,
        codes::lexical::MALFORMED_OPERATOR,
        codes::lexical::UNTERMINATED_CHAR,
        codes::lexical::UNTERMINATED_STRING,
        codes::lexical::INVALID_ESCAPE,
        codes::lexical::UNTERMINATED_DOUBLE,
        codes::lexical::BAD_FLOAT_SUFFIX,
        codes::lexical::BAD_NUMERIC_CONTINUATION,
        codes::lexical::EMPTY_CHAR,
        codes::lexical::CHAR_TOO_LONG,
        codes::lexical::NEWLINE_IN_STRING,
        codes::lexical::UNTERMINATED_BLOCK_COMMENT,
        codes::lexical::LEXEME_TOO_LONG,
    ];

    for code in lexical_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    #[test]
    fn test_tokenize_one_line() {
        let tokens = tokenize("let x;").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.line == 1));
    }

    #[test]
    fn test_tokenize_source_numbers_lines() {
        let tokens = tokenize_source("let a\n\nb;", LexicalPreferences::default()).unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| (t.kind, t.line)).collect();
        assert_eq!(
            lines,
            vec![
                (TokenKind::Let, 1),
                (TokenKind::Identifier, 1),
                (TokenKind::Identifier, 3),
                (TokenKind::Semicolon, 3),
            ]
        );
    }

    #[test]
    fn test_multiline_comment_across_source_lines() {
        let preferences = LexicalPreferences {
            carry_block_comments: true,
            ..LexicalPreferences::default()
        };
        let tokens = tokenize_source("a /*\n b \n*/ c", preferences).unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_recovering_feed_lexes_lines_after_an_error() {
        let mut lexer = Lexer::new();
        let errors = feed_source_recovering(&mut lexer, "let a;\n\"open\nlet b;");
        assert_eq!(errors.len(), 1);
        assert_eq!((errors[0].line(), errors[0].char_pos()), (2, 0));

        let lines: Vec<_> = lexer.tokens().iter().map(|t| (t.kind, t.line)).collect();
        assert_eq!(
            lines,
            vec![
                (TokenKind::Let, 1),
                (TokenKind::Identifier, 1),
                (TokenKind::Semicolon, 1),
                (TokenKind::Let, 3),
                (TokenKind::Identifier, 3),
                (TokenKind::Semicolon, 3),
            ]
        );
        assert_eq!(lexer.state(), LexerState::Start);
    }

    #[test]
    fn test_strict_feed_stops_at_first_error() {
        let mut lexer = Lexer::new();
        assert!(feed_source(&mut lexer, "let a;\n\"open\nlet b;").is_err());
        assert!(lexer.tokens().iter().all(|t| t.line == 1));
    }

    #[test]
    fn test_lexical_codes_registered() {
        assert!(validate_lexical_codes().is_ok());
    }
}
