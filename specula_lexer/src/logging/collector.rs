//! Per-file event collection for batch runs, rendered cargo-style

use super::events::LogEvent;
use crate::config::compile_time::logging::{MAX_LOG_EVENTS_PER_FILE, MAX_TRACKED_FILES};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
pub struct FileProcessingContext {
    pub file_path: PathBuf,
    pub file_id: usize,
}

impl FileProcessingContext {
    pub fn new(file_path: PathBuf, file_id: usize) -> Self {
        Self { file_path, file_id }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProcessingSummary {
    pub total_files: usize,
    pub successful_files: usize,
    pub failed_files: usize,
    pub files_with_warnings: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Thread-safe event store keyed by source file
pub struct ErrorCollector {
    file_events: Mutex<BTreeMap<PathBuf, Vec<LogEvent>>>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self {
            file_events: Mutex::new(BTreeMap::new()),
        }
    }

    /// Record an event against `file_path`. Past the per-file limit a single
    /// overflow warning is appended and later events are dropped.
    pub fn record_event(&self, file_path: &Path, event: LogEvent) {
        let mut events = lock(&self.file_events);

        if !events.contains_key(file_path) && events.len() >= MAX_TRACKED_FILES {
            return;
        }

        let file_events = events.entry(file_path.to_path_buf()).or_default();

        if file_events.len() < MAX_LOG_EVENTS_PER_FILE {
            file_events.push(event);
        } else if file_events.len() == MAX_LOG_EVENTS_PER_FILE {
            file_events.push(LogEvent::warning(&format!(
                "Too many events for file (limit: {})",
                MAX_LOG_EVENTS_PER_FILE
            )));
        }
    }

    pub fn get_file_events(&self, file_path: &Path) -> Vec<LogEvent> {
        lock(&self.file_events)
            .get(file_path)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_file_errors(&self, file_path: &Path) -> Vec<LogEvent> {
        self.get_file_events(file_path)
            .into_iter()
            .filter(|e| e.is_error())
            .collect()
    }

    pub fn get_all_file_events(&self) -> BTreeMap<PathBuf, Vec<LogEvent>> {
        lock(&self.file_events).clone()
    }

    pub fn get_summary(&self) -> ProcessingSummary {
        let events = lock(&self.file_events);

        let mut summary = ProcessingSummary {
            total_files: events.len(),
            ..ProcessingSummary::default()
        };

        for file_events in events.values() {
            let errors = file_events.iter().filter(|e| e.is_error()).count();
            let warnings = file_events.iter().filter(|e| e.is_warning()).count();

            if errors > 0 {
                summary.failed_files += 1;
            } else if warnings > 0 {
                summary.files_with_warnings += 1;
            } else {
                summary.successful_files += 1;
            }
            summary.total_errors += errors;
            summary.total_warnings += warnings;
        }

        summary
    }
}

impl Default for ErrorCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn push_event(output: &mut String, label: &str, file_path: &Path, event: &LogEvent) {
    let location = event
        .span
        .map(|s| {
            format!(
                "\n  --> {}:{}:{}",
                file_path.display(),
                s.start.line,
                s.start.char_pos
            )
        })
        .unwrap_or_default();

    output.push_str(&format!(
        "{}[{}]: {}{}\n",
        label, event.code, event.message, location
    ));

    for (key, value) in &event.context {
        if key != "file" && key != "file_id" {
            output.push_str(&format!("  = {}: {}\n", key, value));
        }
    }
}

/// Render collected errors and warnings grouped by file
pub fn format_cargo_style_errors(collector: &ErrorCollector) -> String {
    let mut output = String::new();

    for (file_path, events) in &collector.get_all_file_events() {
        let errors: Vec<_> = events.iter().filter(|e| e.is_error()).collect();
        let warnings: Vec<_> = events.iter().filter(|e| e.is_warning()).collect();

        if errors.is_empty() && warnings.is_empty() {
            continue;
        }

        output.push_str(&format!("Checking {}...\n", file_path.display()));

        for event in errors {
            push_event(&mut output, "error", file_path, event);
            if super::codes::get_error_metadata(event.code.as_str()).is_some() {
                output.push_str(&format!("  = help: {}\n", event.recommended_action()));
            }
        }

        for event in warnings {
            push_event(&mut output, "warning", file_path, event);
        }

        output.push('\n');
    }

    let summary = collector.get_summary();
    if summary.total_errors > 0 {
        output.push_str(&format!("Total errors: {}\n", summary.total_errors));
    }
    if summary.total_warnings > 0 {
        output.push_str(&format!("Total warnings: {}\n", summary.total_warnings));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use crate::utils::Span;

    #[test]
    fn test_summary_counts_per_file() {
        let collector = ErrorCollector::new();
        let good = Path::new("good.spc");
        let warned = Path::new("warned.spc");
        let bad = Path::new("bad.spc");

        collector.record_event(good, LogEvent::info("ok"));
        collector.record_event(
            warned,
            LogEvent::warning_with_code(codes::lexical::EMPTY_CHAR, "Character is empty"),
        );
        collector.record_event(
            bad,
            LogEvent::error(codes::lexical::UNTERMINATED_STRING, "String not ended"),
        );

        let summary = collector.get_summary();
        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.successful_files, 1);
        assert_eq!(summary.files_with_warnings, 1);
        assert_eq!(summary.failed_files, 1);
        assert_eq!(summary.total_errors, 1);
        assert_eq!(collector.get_file_errors(bad).len(), 1);
        assert!(collector.get_file_errors(warned).is_empty());
    }

    #[test]
    fn test_per_file_limit_adds_one_overflow_warning() {
        let collector = ErrorCollector::new();
        let path = Path::new("noisy.spc");

        for _ in 0..MAX_LOG_EVENTS_PER_FILE + 5 {
            collector.record_event(path, LogEvent::info("event"));
        }

        let events = collector.get_file_events(path);
        assert_eq!(events.len(), MAX_LOG_EVENTS_PER_FILE + 1);
        assert!(events.last().unwrap().is_warning());
    }

    #[test]
    fn test_cargo_style_output() {
        let collector = ErrorCollector::new();
        let path = Path::new("main.spc");
        collector.record_event(
            path,
            LogEvent::error(codes::lexical::UNTERMINATED_CHAR, "Char is not ended")
                .with_span(Span::on_line(4, 2, 3))
                .with_context("file", "main.spc"),
        );

        let output = format_cargo_style_errors(&collector);
        assert!(output.contains("Checking main.spc..."));
        assert!(output.contains("error[E022]: Char is not ended"));
        assert!(output.contains("--> main.spc:4:2"));
        assert!(output.contains("= help:"));
        assert!(!output.contains("= file:"));
        assert!(output.contains("Total errors: 1"));
    }
}
