//! # Specula Lexer CLI
//!
//! Tokenizes `.spc` files and writes a `<stem>_tokens<ext>` dump next to
//! each one.

mod discovery;

use clap::Parser;
use specula_lexer::config::{OutputFormat, RuntimeConfig};
use specula_lexer::file_processor::read_into;
use specula_lexer::lexical::{Lexer, LexerError};
use specula_lexer::logging::{self, codes, LogLevel};
use specula_lexer::{log_error, log_success, output};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "specula", author, version, about = "Specula lexer")]
struct Cli {
    /// Source files or directories to tokenize
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Token dump format: plain or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Print tokens to stdout instead of writing token files
    #[arg(long)]
    stdout: bool,

    /// Let block comments span lines
    #[arg(long)]
    carry_comments: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// TOML file with lexer, logging and output preferences
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,
}

/// What happened to one input file
enum Outcome {
    Written,
    Empty,
    LexerFailed,
    Unreadable,
}

struct Run {
    format: OutputFormat,
    to_stdout: bool,
    write_empty: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match RuntimeConfig::from_toml_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => RuntimeConfig::default(),
    };

    if cli.carry_comments {
        config.lexical.carry_block_comments = true;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    config.logging.min_log_level = match cli.verbose {
        0 => config.logging.min_log_level,
        1 => config.logging.min_log_level.max(LogLevel::Info),
        _ => LogLevel::Debug,
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: logging unavailable: {}", e);
    }
    log::debug!(target: "specula", "{}", logging::config::get_config_summary());

    let run = Run {
        format: config.output.format,
        to_stdout: cli.stdout,
        write_empty: config.output.write_empty,
    };

    let sources = discovery::collect_sources(&cli.paths);
    if sources.is_empty() {
        eprintln!("Error: no .spc files found");
        std::process::exit(1);
    }

    let start = Instant::now();
    let mut lexer = Lexer::with_preferences(config.lexical.clone());
    let mut failed = 0usize;
    let mut written = 0usize;

    for (file_id, path) in sources.iter().enumerate() {
        logging::set_file_context(path.clone(), file_id);
        match process(&mut lexer, path, &run) {
            Outcome::Written => written += 1,
            Outcome::Empty => {}
            Outcome::LexerFailed | Outcome::Unreadable => failed += 1,
        }
        lexer.reset();
        logging::clear_file_context();
    }

    log_success!(
        codes::success::BATCH_COMPLETE,
        "Lexing completed",
        "files" => sources.len(),
        "written" => written,
        "failed" => failed,
        "duration_ms" => start.elapsed().as_millis()
    );

    if failed > 0 {
        if let Some(report) = logging::cargo_style_summary() {
            eprintln!("{}", report);
        }
        std::process::exit(1);
    }
}

fn init_logging(config: &RuntimeConfig) -> Result<(), String> {
    logging::config::init_runtime_preferences(config.logging.clone())?;

    let filter = match config.logging.min_log_level {
        LogLevel::Error => "error",
        LogLevel::Warning => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init()
        .map_err(|e| e.to_string())?;

    specula_bridge::log_facade::init_log_facade(config.logging.min_log_level)
}

fn process(lexer: &mut Lexer, path: &Path, run: &Run) -> Outcome {
    let report = match read_into(lexer, path) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("Error: {}", error);
            return Outcome::Unreadable;
        }
    };

    for error in &report.errors {
        report_lexer_error(error);
    }

    let Some(first) = report.errors.first() else {
        return emit_tokens(lexer, path, run);
    };

    if run.format == OutputFormat::Json {
        emit_error(path, first, run);
    } else {
        emit_tokens(lexer, path, run);
    }
    Outcome::LexerFailed
}

fn report_lexer_error(error: &LexerError) {
    println!(
        "Lexer Error at line {}:{}\n Message: {}",
        error.line(),
        error.char_pos(),
        error.message()
    );
}

fn emit_tokens(lexer: &Lexer, path: &Path, run: &Run) -> Outcome {
    if lexer.tokens().is_empty() && !run.write_empty {
        return Outcome::Empty;
    }

    if run.to_stdout {
        return match output::render(lexer.tokens(), run.format) {
            Ok(text) => {
                println!("{}", text.trim_end());
                Outcome::Written
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                Outcome::Unreadable
            }
        };
    }

    match output::write_tokens(path, lexer.tokens(), run.format) {
        Ok(written) => {
            println!("{} -> {}", path.display(), written.display());
            Outcome::Written
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Outcome::Unreadable
        }
    }
}

fn emit_error(path: &Path, error: &LexerError, run: &Run) {
    let result = if run.to_stdout {
        output::render_json_error(error).map(|json| println!("{}", json))
    } else {
        output::write_error(path, error).map(|_| ())
    };

    if let Err(e) = result {
        log_error!(e.error_code(), &e.to_string(), "file" => path.display());
        eprintln!("Error: {}", e);
    }
}
