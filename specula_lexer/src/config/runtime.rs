// RUNTIME PREFERENCES (User Experience)

use crate::logging::codes::{self, Code};
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Errors raised while loading a preferences file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file '{path}': {message}")]
    Read { path: PathBuf, message: String },

    #[error("Invalid configuration in '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unknown value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        match self {
            ConfigError::Read { .. } => codes::configuration::CONFIG_READ_FAILED,
            ConfigError::Parse { .. } | ConfigError::InvalidValue { .. } => {
                codes::configuration::INVALID_CONFIG
            }
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Keep an open `/* ... */` comment alive across `feed` calls instead of
    /// reporting it as unterminated at the end of each call
    pub carry_block_comments: bool,

    /// Whether each recorded diagnostic is also sent to the logger
    pub log_diagnostics: bool,

    /// Whether to collect per-class token counts
    pub collect_metrics: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            carry_block_comments: env_flag(env_vars::CARRY_BLOCK_COMMENTS, false),
            log_diagnostics: env_flag(env_vars::LOG_DIAGNOSTICS, true),
            collect_metrics: env_flag(env_vars::COLLECT_METRICS, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level an event needs to reach a sink
    pub min_log_level: LogLevel,

    /// Whether to include file context in log messages
    pub include_file_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::STRUCTURED_LOGGING, false),
            enable_console_logging: env_flag(env_vars::CONSOLE_LOGGING, false),
            min_log_level: env::var(env_vars::LOG_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
            include_file_context: env_flag(env_vars::INCLUDE_FILE_CONTEXT, true),
        }
    }
}

/// Layout of a token dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND | text` line per token
    Plain,
    /// The `{"ok":...}` payload
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: env_vars::OUTPUT_FORMAT,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPreferences {
    pub format: OutputFormat,

    /// Write a dump even when the file produced no tokens
    pub write_empty: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            format: env::var(env_vars::OUTPUT_FORMAT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(OutputFormat::Plain),
            write_empty: env_flag(env_vars::WRITE_EMPTY, false),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
    pub output: OutputPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; missing sections and keys keep their defaults
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text, path)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<memory>"),
            message: e.to_string(),
        })
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const CARRY_BLOCK_COMMENTS: &str = "SPECULA_CARRY_BLOCK_COMMENTS";
    pub const LOG_DIAGNOSTICS: &str = "SPECULA_LOG_DIAGNOSTICS";
    pub const COLLECT_METRICS: &str = "SPECULA_COLLECT_METRICS";

    // Logging
    pub const LOG_LEVEL: &str = "SPECULA_LOG_LEVEL";
    pub const STRUCTURED_LOGGING: &str = "SPECULA_STRUCTURED_LOGGING";
    pub const CONSOLE_LOGGING: &str = "SPECULA_CONSOLE_LOGGING";
    pub const INCLUDE_FILE_CONTEXT: &str = "SPECULA_INCLUDE_FILE_CONTEXT";

    // Output
    pub const OUTPUT_FORMAT: &str = "SPECULA_OUTPUT_FORMAT";
    pub const WRITE_EMPTY: &str = "SPECULA_WRITE_EMPTY";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("PLAIN".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert_matches!(
            "yaml".parse::<OutputFormat>(),
            Err(ConfigError::InvalidValue { .. })
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r#"
            [lexical]
            carry_block_comments = true

            [output]
            format = "json"
        "#;
        let config = RuntimeConfig::from_toml_str(text, Path::new("specula.toml")).unwrap();
        assert!(config.lexical.carry_block_comments);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging, LoggingPreferences::default());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = RuntimeConfig::from_toml_str("[lexical\n", Path::new("bad.toml"));
        let error = result.unwrap_err();
        assert_matches!(error, ConfigError::Parse { .. });
        assert_eq!(error.error_code(), codes::configuration::INVALID_CONFIG);
    }

    #[test]
    fn test_toml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("specula.toml");
        let mut config = RuntimeConfig::default();
        config.lexical.carry_block_comments = true;
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        let loaded = RuntimeConfig::from_toml_file(&path).unwrap();
        assert_eq!(loaded, config);

        let missing = RuntimeConfig::from_toml_file(dir.path().join("absent.toml"));
        assert_matches!(missing, Err(ConfigError::Read { .. }));
    }
}
