//! Configuration for the Specula lexer
//!
//! `constants` holds the compile-time bounds, `runtime` the user preferences
//! that default from `SPECULA_*` environment variables and may be overridden
//! from a TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;

pub use runtime::{
    ConfigError, LexicalPreferences, LoggingPreferences, OutputFormat, OutputPreferences,
    RuntimeConfig,
};

/// Build information
pub mod build_info {
    /// Crate version baked in at compile time
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Cargo profile the library was built with
    pub fn profile() -> &'static str {
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    }

    pub fn summary() -> String {
        format!("specula_lexer {} ({})", version(), profile())
    }
}
