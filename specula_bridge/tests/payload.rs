//! Whole-source payloads as an embedding host sees them

use assert_matches::assert_matches;
use specula_bridge::{tokenize, Payload};

fn parsed(source: &str) -> Payload {
    Payload::parse(&tokenize(source)).unwrap()
}

#[test]
fn contract_source_tokens() {
    let source = "contract Door {\n    init-state closed;\n    closed -> open;\n}\n";
    let Payload::Tokens(payload) = parsed(source) else {
        panic!("expected tokens");
    };

    let types: Vec<&str> = payload.tokens.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(
        types,
        vec![
            "K_CONTRACT",
            "IDENT",
            "D_CBRAC_OP",
            "K_INIT_STATE",
            "IDENT",
            "D_SEMICOLON",
            "IDENT",
            "OP_RIGHT_OP",
            "IDENT",
            "D_SEMICOLON",
            "D_CBRAC_CLO",
        ]
    );
}

#[test]
fn recoverable_problems_still_succeed() {
    let Payload::Tokens(payload) = parsed("let a = 1;\nlet b = @;\n") else {
        panic!("expected tokens");
    };
    assert!(payload.tokens.iter().any(|t| t.kind == "UNKNOWN" && t.value == "@"));
}

#[test]
fn terminal_error_reports_opening_position() {
    assert_matches!(
        parsed("let a = 1;\n  /* never closed\n"),
        Payload::Error(payload) if payload.error.line == 2 && payload.error.char_pos == 2
    );
    assert_matches!(
        parsed("x = '\\"),
        Payload::Error(payload) if payload.error.message == "Character escape not ended"
    );
}

#[test]
fn string_values_are_json_escaped() {
    let json = tokenize(r#"let s = "say \"hi\"\n";"#);
    assert!(json.contains(r#"{"type":"L_STRING","value":"say \"hi\"\n"}"#));
}
