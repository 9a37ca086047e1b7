//! Source file reading with size and encoding checks

use crate::config::constants::compile_time::file_processing::{
    MAX_FILE_SIZE, MAX_LINE_COUNT, SOURCE_EXTENSION,
};
use crate::lexical::{self, Lexer, LexerError};
use crate::logging::codes::{self, Code};
use crate::{log_debug, log_error, log_success};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid file extension: expected .{}, found {extension:?}", SOURCE_EXTENSION)]
    InvalidExtension { extension: Option<String> },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("File is empty: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("I/O error reading {path}: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: PathBuf },

    #[error("File exceeds maximum line count: {lines} (max: {max_lines})")]
    TooManyLines { lines: usize, max_lines: usize },
}

impl FileProcessorError {
    pub fn error_code(&self) -> Code {
        use codes::file_processing::*;
        match self {
            FileProcessorError::FileNotFound { .. } => FILE_NOT_FOUND,
            FileProcessorError::InvalidExtension { .. } => INVALID_EXTENSION,
            FileProcessorError::FileTooLarge { .. } => FILE_TOO_LARGE,
            FileProcessorError::EmptyFile { .. } => EMPTY_FILE,
            FileProcessorError::PermissionDenied { .. } => PERMISSION_DENIED,
            FileProcessorError::InvalidEncoding { .. } => INVALID_ENCODING,
            FileProcessorError::IoError { .. } => IO_ERROR,
            FileProcessorError::InvalidPath { .. } => INVALID_PATH,
            FileProcessorError::TooManyLines { .. } => TOO_MANY_LINES,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    fn from_io(path: &Path, error: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            ErrorKind::NotFound => FileProcessorError::FileNotFound { path },
            ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied { path },
            ErrorKind::InvalidData => FileProcessorError::InvalidEncoding { path },
            _ => FileProcessorError::IoError {
                path,
                message: error.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub size: u64,
    pub extension: Option<String>,
    pub line_count: usize,
    pub modified: Option<std::time::SystemTime>,
}

impl FileMetadata {
    pub fn is_source_file(&self) -> bool {
        self.extension.as_deref() == Some(SOURCE_EXTENSION)
    }

    pub fn human_readable_size(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", self.size, UNITS[0])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: Duration,
}

impl FileProcessingResult {
    /// Feed every line (1-based) into `lexer`, then finish it. A terminal
    /// error abandons only its own line; all of them are returned.
    pub fn feed_into(&self, lexer: &mut Lexer) -> Vec<LexerError> {
        lexical::feed_source_recovering(lexer, &self.source)
    }
}

/// Reads source files for the lexer
#[derive(Debug, Clone)]
pub struct FileProcessor {
    /// Reject files whose extension is not `.spc`
    pub require_source_extension: bool,
    /// Accept files with no content
    pub allow_empty: bool,
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProcessor {
    pub fn new() -> Self {
        Self {
            require_source_extension: false,
            allow_empty: true,
        }
    }

    pub fn with_source_extension_required(mut self, required: bool) -> Self {
        self.require_source_extension = required;
        self
    }

    pub fn with_empty_allowed(mut self, allowed: bool) -> Self {
        self.allow_empty = allowed;
        self
    }

    pub fn max_file_size() -> u64 {
        MAX_FILE_SIZE
    }

    pub fn process_file(
        &self,
        file_path: impl AsRef<Path>,
    ) -> Result<FileProcessingResult, FileProcessorError> {
        let file_path = file_path.as_ref();
        let start_time = Instant::now();

        log_debug!("Starting file processing", "file" => file_path.display());

        let result = self.read_checked(file_path, start_time);
        match &result {
            Ok(processed) => {
                log_success!(
                    codes::success::FILE_PROCESSING_SUCCESS,
                    "File processed successfully",
                    "file" => file_path.display(),
                    "size" => processed.metadata.human_readable_size(),
                    "lines" => processed.metadata.line_count,
                    "duration_ms" => format!("{:.2}", processed.processing_duration.as_secs_f64() * 1000.0)
                );
            }
            Err(error) => {
                log_error!(
                    error.error_code(),
                    &error.to_string(),
                    "file" => file_path.display()
                );
            }
        }
        result
    }

    fn read_checked(
        &self,
        file_path: &Path,
        start_time: Instant,
    ) -> Result<FileProcessingResult, FileProcessorError> {
        if file_path.as_os_str().is_empty() {
            return Err(FileProcessorError::InvalidPath {
                path: file_path.to_path_buf(),
            });
        }

        let fs_metadata =
            fs::metadata(file_path).map_err(|e| FileProcessorError::from_io(file_path, e))?;

        if !fs_metadata.is_file() {
            return Err(FileProcessorError::InvalidPath {
                path: file_path.to_path_buf(),
            });
        }

        let extension = file_path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());

        if self.require_source_extension && extension.as_deref() != Some(SOURCE_EXTENSION) {
            return Err(FileProcessorError::InvalidExtension { extension });
        }

        let size = fs_metadata.len();
        if size > MAX_FILE_SIZE {
            return Err(FileProcessorError::FileTooLarge {
                size,
                max_size: MAX_FILE_SIZE,
            });
        }

        if size == 0 && !self.allow_empty {
            return Err(FileProcessorError::EmptyFile {
                path: file_path.to_path_buf(),
            });
        }

        let bytes = fs::read(file_path).map_err(|e| FileProcessorError::from_io(file_path, e))?;
        let source = String::from_utf8(bytes).map_err(|_| FileProcessorError::InvalidEncoding {
            path: file_path.to_path_buf(),
        })?;

        let line_count = source.lines().count();
        if line_count > MAX_LINE_COUNT {
            return Err(FileProcessorError::TooManyLines {
                lines: line_count,
                max_lines: MAX_LINE_COUNT,
            });
        }

        Ok(FileProcessingResult {
            source,
            metadata: FileMetadata {
                path: file_path.to_path_buf(),
                size,
                extension,
                line_count,
                modified: fs_metadata.modified().ok(),
            },
            processing_duration: start_time.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_file(contents: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".spc").tempfile().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_reads_source_and_metadata() {
        let file = source_file(b"let a;\nlet b;\n");
        let result = FileProcessor::new().process_file(file.path()).unwrap();

        assert_eq!(result.metadata.line_count, 2);
        assert_eq!(result.metadata.size, 14);
        assert!(result.metadata.is_source_file());
        assert_eq!(result.metadata.human_readable_size(), "14 B");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = FileProcessor::new()
            .process_file(dir.path().join("absent.spc"))
            .unwrap_err();
        assert_matches!(error, FileProcessorError::FileNotFound { .. });
        assert_eq!(error.error_code(), codes::file_processing::FILE_NOT_FOUND);
    }

    #[test]
    fn test_directory_is_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let error = FileProcessor::new().process_file(dir.path()).unwrap_err();
        assert_matches!(error, FileProcessorError::InvalidPath { .. });
    }

    #[test]
    fn test_invalid_utf8() {
        let file = source_file(&[0x66, 0xff, 0xfe]);
        let error = FileProcessor::new().process_file(file.path()).unwrap_err();
        assert_matches!(error, FileProcessorError::InvalidEncoding { .. });
    }

    #[test]
    fn test_extension_and_empty_checks() {
        let mut other = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        other.write_all(b"x").unwrap();
        let strict = FileProcessor::new().with_source_extension_required(true);
        assert_matches!(
            strict.process_file(other.path()),
            Err(FileProcessorError::InvalidExtension { extension: Some(ext) }) if ext == "txt"
        );

        let empty = source_file(b"");
        assert!(FileProcessor::new().process_file(empty.path()).is_ok());
        assert_matches!(
            FileProcessor::new()
                .with_empty_allowed(false)
                .process_file(empty.path()),
            Err(FileProcessorError::EmptyFile { .. })
        );
    }

    #[test]
    fn test_feed_into_lexer() {
        let file = source_file(b"let a;\n\"open\n");
        let result = FileProcessor::new().process_file(file.path()).unwrap();
        let mut lexer = Lexer::new();

        let errors = result.feed_into(&mut lexer);
        assert_eq!(errors.len(), 1);
        assert_eq!((errors[0].line(), errors[0].char_pos()), (2, 0));
        assert_eq!(lexer.tokens().len(), 3);
    }
}
