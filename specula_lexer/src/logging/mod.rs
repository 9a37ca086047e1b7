//! Process-wide logging for the lexer and its front ends
//!
//! Nothing is emitted until `init_global_logging` (or
//! `init_global_logging_with_service`) installs a service; before that the
//! macros are no-ops. While a file context is set on the current thread,
//! errors and warnings are also recorded per file in the global collector.

pub mod codes;
pub mod collector;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use collector::{ErrorCollector, FileProcessingContext, ProcessingSummary};
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();
static GLOBAL_ERROR_COLLECTOR: OnceLock<Arc<ErrorCollector>> = OnceLock::new();

thread_local! {
    static FILE_CONTEXT: RefCell<Option<FileProcessingContext>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

const REQUIRED_CODES: [Code; 4] = [
    codes::system::INTERNAL_ERROR,
    codes::file_processing::FILE_NOT_FOUND,
    codes::lexical::UNRECOGNIZED_CHARACTER,
    codes::output::WRITE_FAILED,
];

/// Install a service built from the runtime `LoggingPreferences`
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    for code in REQUIRED_CODES {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    let service = Arc::new(service::create_configured_service());
    init_global_logging_with_service(service.clone())?;

    service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Install a caller-built service, e.g. one backed by a `MemoryLogger`
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())?;

    // A collector left over from an earlier partial init is reused.
    let _ = GLOBAL_ERROR_COLLECTOR.set(Arc::new(ErrorCollector::new()));

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some() && GLOBAL_ERROR_COLLECTOR.get().is_some()
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

pub fn try_get_global_error_collector() -> Option<&'static ErrorCollector> {
    GLOBAL_ERROR_COLLECTOR
        .get()
        .map(|collector| collector.as_ref())
}

/// Whether a `log_debug!` call would reach a sink
pub fn debug_enabled() -> bool {
    try_get_global_logger().is_some_and(|logger| logger.should_log(LogLevel::Debug))
}

// ============================================================================
// FILE CONTEXT MANAGEMENT
// ============================================================================

pub fn set_file_context(file_path: PathBuf, file_id: usize) {
    let context = FileProcessingContext::new(file_path, file_id);
    FILE_CONTEXT.with(|ctx| *ctx.borrow_mut() = Some(context));
}

pub fn clear_file_context() {
    FILE_CONTEXT.with(|ctx| *ctx.borrow_mut() = None);
}

pub fn get_current_file_context() -> Option<FileProcessingContext> {
    FILE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT
// ============================================================================

/// Sink for every logging macro
pub fn log_event(mut event: LogEvent) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let file_ctx = get_current_file_context();

    if let Some(ctx) = &file_ctx {
        if config::include_file_context() {
            event = event
                .with_context("file", &ctx.file_path.display().to_string())
                .with_context("file_id", &ctx.file_id.to_string());
        }
    }

    if event.is_error() || event.is_warning() {
        if let (Some(ctx), Some(collector)) = (&file_ctx, try_get_global_error_collector()) {
            collector.record_event(&ctx.file_path, event.clone());
        }
    }

    logger.log_event(event);
}

// ============================================================================
// BATCH PROCESSING
// ============================================================================

pub fn get_file_errors(file_path: &Path) -> Vec<LogEvent> {
    try_get_global_error_collector()
        .map(|collector| collector.get_file_errors(file_path))
        .unwrap_or_default()
}

/// Cargo-style report of everything collected so far
pub fn cargo_style_summary() -> Option<String> {
    try_get_global_error_collector().map(collector::format_cargo_style_errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_context_round_trip() {
        assert!(get_current_file_context().is_none());

        set_file_context(PathBuf::from("ctx.spc"), 7);
        let seen = get_current_file_context().map(|ctx| (ctx.file_path, ctx.file_id));
        clear_file_context();

        assert_eq!(seen, Some((PathBuf::from("ctx.spc"), 7)));
        assert!(get_current_file_context().is_none());
    }

    #[test]
    fn test_global_service_collects_per_file() {
        let memory = service::create_test_logger();
        let installed = init_global_logging_with_service(Arc::new(LoggingService::new(
            memory.clone(),
            LogLevel::Debug,
        )));
        if installed.is_err() {
            // Another test in this binary installed the service first.
            return;
        }
        assert!(is_initialized());

        let path = PathBuf::from("collected.spc");
        set_file_context(path.clone(), 1);
        crate::log_error!(codes::lexical::UNTERMINATED_STRING, "String not ended");
        crate::log_info!("not collected");
        clear_file_context();

        let errors = get_file_errors(&path);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].context.get("file").map(String::as_str),
            Some("collected.spc")
        );
        assert!(memory.has_error_with_code(codes::lexical::UNTERMINATED_STRING));
        assert!(cargo_style_summary().is_some_and(|s| s.contains("collected.spc")));
    }
}
