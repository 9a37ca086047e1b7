//! Error and success codes with their classification metadata
//!
//! Every code the lexer, its file front end, and the bridge can emit lives
//! here together with the severity and recovery behavior attached to it.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Code shared by error, warning and success events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Critical" => Some(Severity::Critical),
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

pub mod system {
    use super::Code;

    /// Reprocess depth exceeded or another broken internal invariant
    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
}

pub mod configuration {
    use super::Code;

    pub const INVALID_CONFIG: Code = Code::new("E001");
    pub const CONFIG_READ_FAILED: Code = Code::new("E002");
}

pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const EMPTY_FILE: Code = Code::new("E008");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
    pub const TOO_MANY_LINES: Code = Code::new("E013");
}

/// One code per lexical diagnostic kind
pub mod lexical {
    use super::Code;

    pub const UNRECOGNIZED_CHARACTER: Code = Code::new("E020");
    pub const MALFORMED_OPERATOR: Code = Code::new("E021");
    pub const UNTERMINATED_CHAR: Code = Code::new("E022");
    pub const UNTERMINATED_STRING: Code = Code::new("E023");
    pub const INVALID_ESCAPE: Code = Code::new("E024");
    pub const UNTERMINATED_DOUBLE: Code = Code::new("E025");
    pub const BAD_FLOAT_SUFFIX: Code = Code::new("E026");
    pub const BAD_NUMERIC_CONTINUATION: Code = Code::new("E027");
    pub const EMPTY_CHAR: Code = Code::new("E028");
    pub const CHAR_TOO_LONG: Code = Code::new("E029");
    pub const NEWLINE_IN_STRING: Code = Code::new("E030");
    pub const UNTERMINATED_BLOCK_COMMENT: Code = Code::new("E031");
    pub const LEXEME_TOO_LONG: Code = Code::new("E032");
}

pub mod output {
    use super::Code;

    pub const WRITE_FAILED: Code = Code::new("E040");
    pub const SERIALIZATION_FAILED: Code = Code::new("E041");
}

pub mod bridge {
    use super::Code;

    pub const NULL_INPUT: Code = Code::new("E050");
    pub const INVALID_UTF8: Code = Code::new("E051");
    pub const INTERIOR_NUL: Code = Code::new("E052");
}

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I004");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const TOKEN_FILE_WRITTEN: Code = Code::new("I021");
    pub const BATCH_COMPLETE: Code = Code::new("I022");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

use Severity::{Critical, High, Low, Medium};

const METADATA: &[ErrorMetadata] = &[
    // System
    ErrorMetadata::new(
        "ERR001",
        "System",
        Critical,
        false,
        true,
        "Internal lexer invariant violated",
        "File a bug report with the input that triggered it",
    ),
    // Configuration
    ErrorMetadata::new(
        "E001",
        "Configuration",
        High,
        false,
        true,
        "Invalid configuration value",
        "Fix the reported key in the configuration file or environment",
    ),
    ErrorMetadata::new(
        "E002",
        "Configuration",
        High,
        false,
        true,
        "Configuration file could not be read",
        "Verify the configuration path and permissions",
    ),
    // File processing
    ErrorMetadata::new(
        "E005",
        "FileProcessing",
        High,
        true,
        false,
        "Source file not found",
        "Verify file path exists and is accessible",
    ),
    ErrorMetadata::new(
        "E006",
        "FileProcessing",
        Medium,
        true,
        false,
        "Source file has an unexpected extension",
        "Use files with the .spc extension",
    ),
    ErrorMetadata::new(
        "E007",
        "FileProcessing",
        High,
        true,
        false,
        "Source file exceeds the size limit",
        "Split the source into smaller files",
    ),
    ErrorMetadata::new(
        "E008",
        "FileProcessing",
        Low,
        true,
        false,
        "Source file is empty",
        "Add content or skip the file",
    ),
    ErrorMetadata::new(
        "E009",
        "FileProcessing",
        High,
        true,
        false,
        "Permission denied reading source file",
        "Check file permissions",
    ),
    ErrorMetadata::new(
        "E010",
        "FileProcessing",
        High,
        true,
        false,
        "Source file is not valid UTF-8",
        "Re-encode the file as UTF-8",
    ),
    ErrorMetadata::new(
        "E011",
        "FileProcessing",
        High,
        true,
        false,
        "I/O error while reading source file",
        "Retry or check the storage device",
    ),
    ErrorMetadata::new(
        "E012",
        "FileProcessing",
        Medium,
        true,
        false,
        "Invalid source path",
        "Pass a regular file path",
    ),
    ErrorMetadata::new(
        "E013",
        "FileProcessing",
        High,
        true,
        false,
        "Source file has too many lines",
        "Split the source into smaller files",
    ),
    // Lexical
    ErrorMetadata::new(
        "E020",
        "Lexical",
        Medium,
        true,
        false,
        "Unrecognized initial character",
        "Remove or replace the character",
    ),
    ErrorMetadata::new(
        "E021",
        "Lexical",
        Medium,
        true,
        false,
        "Malformed operator sequence",
        "Separate the operator characters",
    ),
    ErrorMetadata::new(
        "E022",
        "Lexical",
        High,
        false,
        true,
        "Character literal is not closed",
        "Close the literal with a single quote",
    ),
    ErrorMetadata::new(
        "E023",
        "Lexical",
        High,
        false,
        true,
        "String literal is not closed",
        "Close the literal with a double quote",
    ),
    ErrorMetadata::new(
        "E024",
        "Lexical",
        Medium,
        true,
        false,
        "Invalid escape sequence",
        "Use one of \\a \\b \\f \\n \\r \\t \\v \\\\ \\' \\\" \\?",
    ),
    ErrorMetadata::new(
        "E025",
        "Lexical",
        Medium,
        true,
        false,
        "Decimal literal ends with a period",
        "Add at least one digit after the period",
    ),
    ErrorMetadata::new(
        "E026",
        "Lexical",
        Medium,
        true,
        false,
        "Float suffix is not followed by a delimiter",
        "Separate the literal from what follows",
    ),
    ErrorMetadata::new(
        "E027",
        "Lexical",
        Medium,
        true,
        false,
        "Unexpected character inside a numeric literal",
        "Separate the number from the following text",
    ),
    ErrorMetadata::new(
        "E028",
        "Lexical",
        Medium,
        true,
        false,
        "Character literal is empty",
        "Put exactly one character between the quotes",
    ),
    ErrorMetadata::new(
        "E029",
        "Lexical",
        Medium,
        true,
        false,
        "Character literal holds more than one character",
        "Use a string literal for multiple characters",
    ),
    ErrorMetadata::new(
        "E030",
        "Lexical",
        Low,
        true,
        false,
        "Line break inside a string literal",
        "Use \\n instead of a raw line break",
    ),
    ErrorMetadata::new(
        "E031",
        "Lexical",
        High,
        false,
        true,
        "Block comment is not closed",
        "Close the comment with */",
    ),
    ErrorMetadata::new(
        "E032",
        "Lexical",
        Medium,
        true,
        false,
        "Lexeme exceeds the maximum token length",
        "Split the token into smaller pieces",
    ),
    // Output
    ErrorMetadata::new(
        "E040",
        "Output",
        High,
        true,
        false,
        "Token file could not be written",
        "Check the output directory permissions",
    ),
    ErrorMetadata::new(
        "E041",
        "Output",
        High,
        true,
        false,
        "Token payload could not be serialized",
        "File a bug report with the input",
    ),
    // Bridge
    ErrorMetadata::new(
        "E050",
        "Bridge",
        High,
        true,
        false,
        "Null pointer passed across the C boundary",
        "Pass a valid NUL-terminated string",
    ),
    ErrorMetadata::new(
        "E051",
        "Bridge",
        High,
        true,
        false,
        "Input across the C boundary is not UTF-8",
        "Encode the source as UTF-8 before calling",
    ),
    ErrorMetadata::new(
        "E052",
        "Bridge",
        High,
        true,
        false,
        "Result payload contains an interior NUL byte",
        "File a bug report with the input",
    ),
    // Success
    ErrorMetadata::new(
        "I001",
        "Success",
        Low,
        true,
        false,
        "Logging system initialized",
        "Continue normal operation",
    ),
    ErrorMetadata::new(
        "I004",
        "Success",
        Low,
        true,
        false,
        "Source file read successfully",
        "Continue normal operation",
    ),
    ErrorMetadata::new(
        "I020",
        "Success",
        Low,
        true,
        false,
        "Tokenization completed",
        "Continue normal operation",
    ),
    ErrorMetadata::new(
        "I021",
        "Success",
        Low,
        true,
        false,
        "Token file written",
        "Continue normal operation",
    ),
    ErrorMetadata::new(
        "I022",
        "Success",
        Low,
        true,
        false,
        "Batch tokenization completed",
        "Continue normal operation",
    ),
];

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        METADATA
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
