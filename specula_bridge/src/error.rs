//! Errors raised at the embedding boundary

use specula_lexer::logging::codes::{self, Code};
use specula_lexer::output::ErrorPayload;
use std::ffi::NulError;
use std::str::Utf8Error;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Null pointer passed as source text")]
    NullInput,

    #[error("Source text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("Output contains an interior NUL byte: {0}")]
    InteriorNul(#[from] NulError),

    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    pub fn error_code(&self) -> Code {
        match self {
            BridgeError::NullInput => codes::bridge::NULL_INPUT,
            BridgeError::InvalidUtf8(_) => codes::bridge::INVALID_UTF8,
            BridgeError::InteriorNul(_) => codes::bridge::INTERIOR_NUL,
            BridgeError::Serialization(_) => codes::output::SERIALIZATION_FAILED,
        }
    }

    /// Boundary failures have no source position; both coordinates are 0
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload::new(self.to_string(), 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_registered() {
        for error in [
            BridgeError::NullInput,
            BridgeError::InvalidUtf8(std::str::from_utf8(&[0xff]).unwrap_err()),
        ] {
            assert!(codes::get_error_metadata(error.error_code().as_str()).is_some());
        }
    }

    #[test]
    fn test_payload_has_no_position() {
        let payload = BridgeError::NullInput.to_payload();
        assert!(!payload.ok);
        assert_eq!((payload.error.line, payload.error.char_pos), (0, 0));
        assert_eq!(payload.error.message, "Null pointer passed as source text");
    }
}
