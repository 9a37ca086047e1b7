//! # Specula Bridge
//!
//! Tokenizes a whole source text in one call and answers with the JSON
//! payload a host expects:
//!
//! - `{"ok":true,"tokens":[{"type":"K_LET","value":"let"}, ...]}`
//! - `{"ok":false,"error":{"message":"...","line":1,"char":4}}`
//!
//! [`tokenize`] is the Rust entry point; [`ffi`] exposes the same call over
//! the C ABI for embedding hosts.

pub mod error;
pub mod ffi;
#[cfg(feature = "logging")]
pub mod log_facade;

pub use error::BridgeError;

use specula_lexer::config::LexicalPreferences;
use specula_lexer::lexical::{self, Lexer, LexerError};
use specula_lexer::log_error;
use specula_lexer::output::{self, ErrorPayload, TokensPayload};
use specula_lexer::tokens::Token;

/// Returned when even the error payload cannot be serialized
const FALLBACK_ERROR: &str =
    r#"{"ok":false,"error":{"message":"Failed to serialize payload","line":0,"char":0}}"#;

/// Preferences for whole-source tokenizing: block comments may span lines
pub fn bridge_preferences() -> LexicalPreferences {
    LexicalPreferences {
        carry_block_comments: true,
        ..LexicalPreferences::default()
    }
}

/// Split `source` into lines and feed them 1-indexed into one lexer
pub fn tokenize_tokens(source: &str) -> Result<Vec<Token>, LexerError> {
    let mut lexer = Lexer::with_preferences(bridge_preferences());
    lexical::feed_source(&mut lexer, source)?;
    Ok(lexer.take_tokens())
}

/// JSON success or error payload for `source`
pub fn tokenize(source: &str) -> String {
    let rendered = match tokenize_tokens(source) {
        Ok(tokens) => output::render_json_tokens(&tokens),
        Err(error) => output::render_json_error(&error),
    };

    match rendered {
        Ok(json) => json,
        Err(error) => {
            log_error!(error.error_code(), &error.to_string());
            payload_json(&ErrorPayload::new(error.to_string(), 0, 0))
        }
    }
}

/// Error payload for a failure at the boundary itself
pub fn error_json(error: &BridgeError) -> String {
    log_error!(error.error_code(), &error.to_string());
    payload_json(&error.to_payload())
}

fn payload_json(payload: &ErrorPayload) -> String {
    serde_json::to_string(payload).unwrap_or_else(|_| FALLBACK_ERROR.to_string())
}

/// Parsed form of a [`tokenize`] answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Tokens(TokensPayload),
    Error(ErrorPayload),
}

impl Payload {
    pub fn parse(json: &str) -> Result<Self, BridgeError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("ok").and_then(serde_json::Value::as_bool) == Some(true) {
            Ok(Payload::Tokens(serde_json::from_value(value)?))
        } else {
            Ok(Payload::Error(serde_json::from_value(value)?))
        }
    }
}
