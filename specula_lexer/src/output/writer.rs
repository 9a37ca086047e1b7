use crate::config::compile_time::file_processing::TOKEN_FILE_SUFFIX;
use crate::config::runtime::OutputFormat;
use crate::lexical::LexerError;
use crate::logging::codes::{self, Code};
use crate::tokens::Token;
use crate::{log_error, log_success};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to write token file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize tokens: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input path has no file name: {path}")]
    NoFileName { path: PathBuf },
}

impl OutputError {
    pub fn error_code(&self) -> Code {
        match self {
            OutputError::Write { .. } | OutputError::NoFileName { .. } => {
                codes::output::WRITE_FAILED
            }
            OutputError::Serialization(_) => codes::output::SERIALIZATION_FAILED,
        }
    }
}

/// One token in the JSON payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// `{"ok":true,"tokens":[...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokensPayload {
    pub ok: bool,
    pub tokens: Vec<TokenEntry>,
}

impl TokensPayload {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        Self {
            ok: true,
            tokens: tokens
                .iter()
                .map(|token| TokenEntry {
                    kind: token.kind.as_str().to_string(),
                    value: token.text.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub line: u64,
    #[serde(rename = "char")]
    pub char_pos: u64,
}

/// `{"ok":false,"error":{"message":...,"line":...,"char":...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub ok: bool,
    pub error: ErrorBody,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>, line: u64, char_pos: u64) -> Self {
        Self {
            ok: false,
            error: ErrorBody {
                message: message.into(),
                line,
                char_pos,
            },
        }
    }

    pub fn from_lexer_error(error: &LexerError) -> Self {
        Self::new(
            error.message(),
            u64::from(error.line()),
            error.char_pos() as u64,
        )
    }
}

/// Sibling path `<stem>_tokens<ext>` for `input`
pub fn output_path(input: &Path) -> Result<PathBuf, OutputError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| OutputError::NoFileName {
            path: input.to_path_buf(),
        })?
        .to_string_lossy();

    let mut name = format!("{stem}{TOKEN_FILE_SUFFIX}");
    if let Some(extension) = input.extension() {
        name.push('.');
        name.push_str(&extension.to_string_lossy());
    }
    Ok(input.with_file_name(name))
}

/// One `KIND | text` line per token
pub fn render_plain(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

pub fn render_json_tokens(tokens: &[Token]) -> Result<String, OutputError> {
    Ok(serde_json::to_string(&TokensPayload::from_tokens(tokens))?)
}

pub fn render_json_error(error: &LexerError) -> Result<String, OutputError> {
    Ok(serde_json::to_string(&ErrorPayload::from_lexer_error(error))?)
}

pub fn render(tokens: &[Token], format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Plain => Ok(render_plain(tokens)),
        OutputFormat::Json => render_json_tokens(tokens),
    }
}

fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf, OutputError> {
    if let Err(source) = fs::write(&path, contents) {
        let error = OutputError::Write { path, source };
        log_error!(error.error_code(), &error.to_string());
        return Err(error);
    }
    Ok(path)
}

/// Write `tokens` beside `input` and return the written path
pub fn write_tokens(
    input: &Path,
    tokens: &[Token],
    format: OutputFormat,
) -> Result<PathBuf, OutputError> {
    let path = output_path(input)?;
    let contents = render(tokens, format)?;
    let path = write_file(path, &contents)?;

    log_success!(
        codes::success::TOKEN_FILE_WRITTEN,
        "Token file written",
        "file" => path.display(),
        "tokens" => tokens.len(),
        "format" => format.as_str()
    );
    Ok(path)
}

/// Write the JSON error payload beside `input`
pub fn write_error(input: &Path, error: &LexerError) -> Result<PathBuf, OutputError> {
    let path = output_path(input)?;
    let contents = render_json_error(error)?;
    write_file(path, &contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tokenize;
    use crate::tokens::TokenKind;
    use assert_matches::assert_matches;

    #[test]
    fn test_output_path_keeps_extension() {
        assert_eq!(
            output_path(Path::new("dir/main.spc")).unwrap(),
            PathBuf::from("dir/main_tokens.spc")
        );
        assert_eq!(
            output_path(Path::new("notes")).unwrap(),
            PathBuf::from("notes_tokens")
        );
        assert_matches!(
            output_path(Path::new("")),
            Err(OutputError::NoFileName { .. })
        );
    }

    #[test]
    fn test_render_plain() {
        let tokens = tokenize("let x = 1;").unwrap();
        assert_eq!(
            render_plain(&tokens),
            "K_LET | let\nIDENT | x\nOP_EQUALS | =\nL_INT | 1\nD_SEMICOLON | ;\n"
        );
    }

    #[test]
    fn test_render_json_escapes_control_characters() {
        let tokens = vec![
            Token::new(TokenKind::LiteralString, "a\"b\\\n\t\u{1}", 1, 0, 12),
            Token::new(TokenKind::Semicolon, ";", 1, 12, 13),
        ];
        assert_eq!(
            render_json_tokens(&tokens).unwrap(),
            r#"{"ok":true,"tokens":[{"type":"L_STRING","value":"a\"b\\\n\t\u0001"},{"type":"D_SEMICOLON","value":";"}]}"#
        );
    }

    #[test]
    fn test_render_json_error() {
        let error = tokenize("x = \"abc").unwrap_err();
        let json = render_json_error(&error).unwrap();
        let payload: ErrorPayload = serde_json::from_str(&json).unwrap();
        assert!(!payload.ok);
        assert_eq!(payload.error.line, 1);
        assert_eq!(payload.error.char_pos, 4);
        assert!(json.contains(r#""char":4"#));
    }

    #[test]
    fn test_write_tokens_creates_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("prog.spc");
        let tokens = tokenize("fn f()").unwrap();

        let written = write_tokens(&input, &tokens, OutputFormat::Json).unwrap();
        assert_eq!(written, dir.path().join("prog_tokens.spc"));

        let payload: TokensPayload =
            serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
        assert_eq!(payload.tokens.len(), 4);
        assert_eq!(payload.tokens[0].kind, "K_FN");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing").join("prog.spc");
        let error = write_tokens(&input, &[], OutputFormat::Plain).unwrap_err();
        assert_matches!(error, OutputError::Write { .. });
        assert_eq!(error.error_code(), codes::output::WRITE_FAILED);
    }
}
