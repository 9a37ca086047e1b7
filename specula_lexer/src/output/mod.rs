//! Token writer
//!
//! Serializes a token list next to its source file as `<stem>_tokens<ext>`,
//! either as `KIND | text` lines or as the JSON payload shared with the
//! embedding bridge.

mod writer;

pub use writer::{
    output_path, render, render_json_error, render_json_tokens, render_plain, write_error,
    write_tokens, ErrorBody, ErrorPayload, OutputError, TokenEntry, TokensPayload,
};
