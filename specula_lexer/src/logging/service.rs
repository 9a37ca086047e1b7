//! Logger sinks and the service that filters events before they reach one

use super::codes::Code;
use super::config;
use super::events::{LogEvent, LogLevel};
use crate::config::compile_time::logging::MEMORY_LOGGER_CAPACITY;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A destination for log events
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Service built from the installed `LoggingPreferences`
    pub fn with_config() -> Self {
        let min_level = config::get_min_log_level();
        let logger: Arc<dyn Logger> = if !config::use_console_logging() {
            Arc::new(NullLogger)
        } else if config::use_structured_logging() {
            Arc::new(StructuredLogger::new(min_level))
        } else {
            Arc::new(ConsoleLogger::new(min_level))
        };

        Self::new(logger, min_level)
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, mut event: LogEvent) {
        if !self.should_log(event.level) {
            return;
        }

        let limit = config::get_max_log_message_length();
        if event.message.chars().count() > limit {
            event.message = event.message.chars().take(limit).collect();
            event.message.push_str("...");
        }

        self.logger.log(&event);
    }
}

/// Discards everything; the default when console output is off
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: &LogEvent) {}
}

/// Human-readable lines, errors to stderr
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.level > self.min_level {
            return;
        }
        match event.level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", event.format()),
            _ => println!("{}", event.format()),
        }
    }
}

/// One JSON object per line
pub struct StructuredLogger {
    min_level: LogLevel,
}

impl StructuredLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        if event.level > self.min_level {
            return;
        }
        let line = event.format_json().unwrap_or_else(|_| event.format());
        match event.level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

/// Bounded in-memory sink used by tests and embedders
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
    capacity: usize,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_LOGGER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }

    fn events(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.events().clone()
    }

    pub fn clear(&self) {
        self.events().clear();
    }

    pub fn event_count(&self) -> usize {
        self.events().len()
    }

    pub fn get_errors(&self) -> Vec<LogEvent> {
        self.filtered(|e| e.is_error())
    }

    pub fn has_error_with_code(&self, code: Code) -> bool {
        self.events().iter().any(|e| e.is_error() && e.code == code)
    }

    fn filtered(&self, keep: impl Fn(&LogEvent) -> bool) -> Vec<LogEvent> {
        self.events().iter().filter(|e| keep(*e)).cloned().collect()
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.events();
        if events.len() >= self.capacity {
            let overflow = events.len() + 1 - self.capacity;
            events.drain(0..overflow);
        }
        events.push(event.clone());
    }
}

pub fn create_configured_service() -> LoggingService {
    LoggingService::with_config()
}

pub fn create_test_logger() -> Arc<MemoryLogger> {
    Arc::new(MemoryLogger::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_memory_logger() {
        let logger = MemoryLogger::new();

        logger.log(&LogEvent::info("Message 1"));
        logger.log(&LogEvent::error(
            codes::lexical::UNTERMINATED_CHAR,
            "Char is not ended",
        ));

        assert_eq!(logger.event_count(), 2);
        assert_eq!(logger.get_errors().len(), 1);
        assert!(logger.has_error_with_code(codes::lexical::UNTERMINATED_CHAR));

        logger.clear();
        assert_eq!(logger.event_count(), 0);
    }

    #[test]
    fn test_memory_logger_drops_oldest_at_capacity() {
        let logger = MemoryLogger::with_capacity(2);
        for message in ["a", "b", "c"] {
            logger.log(&LogEvent::info(message));
        }

        let messages: Vec<_> = logger.get_events().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_level_filtering() {
        let logger = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(logger.clone(), LogLevel::Error);

        service.log_event(LogEvent::debug("Debug message"));
        service.log_event(LogEvent::warning_with_code(
            codes::lexical::EMPTY_CHAR,
            "Character is empty",
        ));
        service.log_event(LogEvent::error(codes::system::INTERNAL_ERROR, "Reprocess limit"));

        assert_eq!(logger.event_count(), 1);
        assert!(logger.has_error_with_code(codes::system::INTERNAL_ERROR));
    }

    #[test]
    fn test_long_messages_are_truncated() {
        let logger = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(logger.clone(), LogLevel::Debug);
        let limit = config::get_max_log_message_length();

        service.log_event(LogEvent::info(&"x".repeat(limit + 10)));

        let events = logger.get_events();
        assert_eq!(events[0].message.chars().count(), limit + 3);
        assert!(events[0].message.ends_with("..."));
    }
}
