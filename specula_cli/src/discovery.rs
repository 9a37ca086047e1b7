//! Expands command-line paths into the list of source files to lex

use specula_lexer::config::compile_time::file_processing::{SOURCE_EXTENSION, TOKEN_FILE_SUFFIX};
use specula_lexer::log_info;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(SOURCE_EXTENSION)
}

/// Token files written by earlier runs share the source extension
fn is_token_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(TOKEN_FILE_SUFFIX))
}

/// Files are kept as given; directories are walked for `.spc` sources in
/// sorted order. Paths that do not exist are returned too so the reader can
/// report them.
pub fn collect_sources(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut sources = Vec::new();

    for path in paths {
        if !path.is_dir() {
            sources.push(path.clone());
            continue;
        }

        let before = sources.len();
        for entry in WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            let candidate = entry.path();
            if entry.file_type().is_file() && is_source_file(candidate) && !is_token_file(candidate)
            {
                sources.push(candidate.to_path_buf());
            }
        }

        log_info!(
            "Discovered source files",
            "directory" => path.display(),
            "count" => sources.len() - before
        );
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_walks_directories_for_sources() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("b.spc"), "").unwrap();
        fs::write(dir.path().join("a.spc"), "").unwrap();
        fs::write(dir.path().join("a_tokens.spc"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(nested.join("c.spc"), "").unwrap();

        let found = collect_sources(&[dir.path().to_path_buf()]);
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.spc", "b.spc", "c.spc"]);
    }

    #[test]
    fn test_explicit_files_are_kept() {
        let explicit = PathBuf::from("missing/whatever.txt");
        assert_eq!(collect_sources(&[explicit.clone()]), vec![explicit]);
    }
}
