//! Source reader: loads `.spc` files and feeds them to a [`Lexer`]

mod processor;

use crate::lexical::{Lexer, LexerError};
pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};
use std::path::Path;

/// What reading one file into the lexer produced
#[derive(Debug)]
pub struct ReadReport {
    pub metadata: FileMetadata,
    /// Terminal lexer errors, one per abandoned line, in source order
    pub errors: Vec<LexerError>,
}

impl ReadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn process_file(
    file_path: impl AsRef<Path>,
) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(file_path)
}

/// Read `path` and feed it line by line into `lexer`.
///
/// A terminal lexer error abandons the rest of its line only; reading goes
/// on with the next line and the error is collected in the report.
pub fn read_into(
    lexer: &mut Lexer,
    path: impl AsRef<Path>,
) -> Result<ReadReport, FileProcessorError> {
    let result = process_file(path)?;
    let errors = result.feed_into(lexer);
    Ok(ReadReport {
        metadata: result.metadata,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_read_into_reports_file_and_lexer_failures() {
        let dir = tempfile::tempdir().unwrap();
        let mut lexer = Lexer::new();

        let missing = read_into(&mut lexer, dir.path().join("none.spc"));
        assert_matches!(missing, Err(FileProcessorError::FileNotFound { .. }));

        let path = dir.path().join("bad.spc");
        std::fs::write(&path, "x \"ab").unwrap();
        let report = read_into(&mut lexer, &path).unwrap();
        assert!(!report.is_clean());
        assert_matches!(report.errors.as_slice(), [LexerError::Terminal(_)]);
        assert_eq!(report.metadata.line_count, 1);
    }
}
