//! Reading source files from disk and writing their token files

use assert_matches::assert_matches;
use specula_lexer::config::{LexicalPreferences, OutputFormat};
use specula_lexer::file_processor::{read_into, FileProcessorError};
use specula_lexer::lexical::{Lexer, LexerError};
use specula_lexer::output::{self, ErrorPayload, TokensPayload};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn lines_are_numbered_from_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "lines.spc", "let a;\n\nlet b;\n");

    let mut lexer = Lexer::new();
    let report = read_into(&mut lexer, &path).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.metadata.line_count, 3);
    let lines: Vec<u32> = lexer.tokens().iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 1, 3, 3, 3]);
}

#[test]
fn plain_token_file_next_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "plain.spc", "x <-> y;\n");

    let mut lexer = Lexer::new();
    read_into(&mut lexer, &path).unwrap();
    let written = output::write_tokens(&path, lexer.tokens(), OutputFormat::Plain).unwrap();

    assert_eq!(written, dir.path().join("plain_tokens.spc"));
    assert_eq!(
        fs::read_to_string(written).unwrap(),
        "IDENT | x\nOP_BIDIR_OP | <->\nIDENT | y\nD_SEMICOLON | ;\n"
    );
}

#[test]
fn json_token_file_decodes_escapes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "json.spc", "let s = \"a\\tb\";\n");

    let mut lexer = Lexer::new();
    read_into(&mut lexer, &path).unwrap();
    let written = output::write_tokens(&path, lexer.tokens(), OutputFormat::Json).unwrap();

    let raw = fs::read_to_string(written).unwrap();
    assert!(raw.contains(r#"{"type":"L_STRING","value":"a\tb"}"#));

    let payload: TokensPayload = serde_json::from_str(&raw).unwrap();
    assert!(payload.ok);
    assert_eq!(payload.tokens.len(), 5);
}

#[test]
fn terminal_error_in_file_keeps_earlier_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "broken.spc", "let a = 1;\nlet b = \"c;\nlet c;\n");

    let mut lexer = Lexer::new();
    let report = read_into(&mut lexer, &path).unwrap();
    assert_matches!(report.errors.as_slice(), [LexerError::Terminal(_)]);

    let lexer_error = &report.errors[0];
    assert_eq!((lexer_error.line(), lexer_error.char_pos()), (2, 8));
    assert_eq!(lexer.tokens().len(), 11);

    let written = output::write_error(&path, lexer_error).unwrap();
    let payload: ErrorPayload = serde_json::from_str(&fs::read_to_string(written).unwrap()).unwrap();
    assert!(!payload.ok);
    assert_eq!((payload.error.line, payload.error.char_pos), (2, 8));
}

#[test]
fn reading_resumes_on_the_line_after_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "resume.spc", "let a;\n\"open\nlet b;\n");

    let mut lexer = Lexer::new();
    let report = read_into(&mut lexer, &path).unwrap();

    assert_eq!(report.errors.len(), 1);
    assert_eq!((report.errors[0].line(), report.errors[0].char_pos()), (2, 0));

    let tokens: Vec<(u32, &str)> = lexer
        .tokens()
        .iter()
        .map(|t| (t.line, t.text.as_str()))
        .collect();
    assert_eq!(
        tokens,
        vec![(1, "let"), (1, "a"), (1, ";"), (3, "let"), (3, "b"), (3, ";")]
    );
}

#[test]
fn every_failing_line_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "many.spc", "'a\nok;\n\"x\n");

    let mut lexer = Lexer::new();
    let report = read_into(&mut lexer, &path).unwrap();

    let positions: Vec<(u32, usize)> = report
        .errors
        .iter()
        .map(|e| (e.line(), e.char_pos()))
        .collect();
    assert_eq!(positions, vec![(1, 0), (3, 0)]);
    let texts: Vec<&str> = lexer.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["ok", ";"]);
}

#[test]
fn block_comment_spanning_lines_needs_carry() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "comment.spc", "a /* one\ntwo */ b\n");

    let mut strict = Lexer::with_preferences(LexicalPreferences {
        carry_block_comments: false,
        ..LexicalPreferences::default()
    });
    let report = read_into(&mut strict, &path).unwrap();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].line(), 1);

    let mut carrying = Lexer::with_preferences(LexicalPreferences {
        carry_block_comments: true,
        ..LexicalPreferences::default()
    });
    assert!(read_into(&mut carrying, &path).unwrap().is_clean());
    let texts: Vec<&str> = carrying.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[test]
fn unreadable_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let mut lexer = Lexer::new();

    assert_matches!(
        read_into(&mut lexer, dir.path().join("missing.spc")),
        Err(FileProcessorError::FileNotFound { .. })
    );

    let binary = dir.path().join("binary.spc");
    fs::write(&binary, [0xc3, 0x28]).unwrap();
    assert_matches!(
        read_into(&mut lexer, &binary),
        Err(FileProcessorError::InvalidEncoding { .. })
    );
}

#[test]
fn crlf_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "crlf.spc", "let a;\r\nlet b;\r\n");

    let mut lexer = Lexer::new();
    read_into(&mut lexer, &path).unwrap();
    assert_eq!(lexer.tokens().len(), 6);
    assert!(lexer.diagnostics().is_empty());
}
