//! Forwards lexer log events into the `log` facade

use specula_lexer::logging::{self, LogEvent, LogLevel, Logger, LoggingService};
use std::sync::Arc;

const TARGET: &str = "specula";

/// A [`Logger`] that hands every event to whichever `log` backend is installed
#[derive(Debug, Default)]
pub struct LogFacadeLogger;

impl LogFacadeLogger {
    pub fn new() -> Self {
        Self
    }

    pub fn facade_level(level: LogLevel) -> log::Level {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }
}

impl Logger for LogFacadeLogger {
    fn log(&self, event: &LogEvent) {
        let level = Self::facade_level(event.level);
        if log::log_enabled!(target: TARGET, level) {
            log::log!(target: TARGET, level, "{}", event.format());
        }
    }
}

/// Install a global lexer logging service backed by the `log` facade
pub fn init_log_facade(min_level: LogLevel) -> Result<(), String> {
    let service = LoggingService::new(Arc::new(LogFacadeLogger::new()), min_level);
    logging::init_global_logging_with_service(Arc::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(LogFacadeLogger::facade_level(LogLevel::Warning), log::Level::Warn);
        assert_eq!(LogFacadeLogger::facade_level(LogLevel::Debug), log::Level::Debug);
    }

    #[test]
    fn test_logging_without_backend_is_silent() {
        LogFacadeLogger::new().log(&LogEvent::info("no backend installed"));
    }
}
