// Utilities Module
//
// File discovery and build constraint helpers used by the extractor manager.

/// File utilities
pub mod file_utils {
    use crate::error::{ParseError, Result};
    use crate::language::detect_language_from_extension;
    use regex::Regex;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Check if a file has a supported language extension
    pub fn is_supported_file(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(detect_language_from_extension)
            .is_some()
    }

    /// Read file content safely
    pub fn read_file_content(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Go files directly inside `dir` whose file name matches `pattern`
    ///
    /// Subdirectories are not descended into; symlinks are followed. The
    /// result is sorted by path.
    pub fn list_source_files(dir: &Path, pattern: &Regex) -> Result<Vec<PathBuf>> {
        let io_error = |source: std::io::Error| ParseError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            let name_matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.is_match(name));
            if !name_matches || !is_supported_file(&path) {
                continue;
            }

            let metadata = fs::metadata(&path).map_err(|source| ParseError::Io {
                path: path.clone(),
                source,
            })?;
            if metadata.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tempfile::TempDir;

        #[test]
        fn test_is_supported_file() {
            assert!(is_supported_file(Path::new("model/user.go")));
            assert!(!is_supported_file(Path::new("model/user.rs")));
            assert!(!is_supported_file(Path::new("Makefile")));
        }

        #[test]
        fn test_list_source_files_filters_and_sorts() {
            let temp_dir = TempDir::new().unwrap();
            for name in ["b.go", "a.go", "a_test.go", "notes.txt"] {
                fs::write(temp_dir.path().join(name), "package x\n").unwrap();
            }
            fs::create_dir(temp_dir.path().join("nested.go")).unwrap();

            let pattern = Regex::new(r"^[a-z]+\.go$").unwrap();
            let files = list_source_files(temp_dir.path(), &pattern).unwrap();

            let names: Vec<String> = files
                .iter()
                .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                .collect();
            assert_eq!(
                names,
                vec!["a.go", "b.go"],
                "Only matching .go files, sorted, no directories"
            );
        }

        #[cfg(unix)]
        #[test]
        fn test_list_source_files_follows_symlinks() {
            let source_dir = TempDir::new().unwrap();
            let target = source_dir.path().join("point.go");
            fs::write(&target, "package geo\n").unwrap();

            let scan_dir = TempDir::new().unwrap();
            let link = scan_dir.path().join("point.go");
            std::os::unix::fs::symlink(&target, &link).unwrap();
            std::os::unix::fs::symlink(source_dir.path(), scan_dir.path().join("linked_dir.go"))
                .unwrap();

            let pattern = Regex::new(".*").unwrap();
            let files = list_source_files(scan_dir.path(), &pattern).unwrap();

            assert_eq!(
                files,
                vec![link],
                "Symlinked unit is listed, symlinked directory is not"
            );
        }

        #[test]
        fn test_missing_directory_is_io_error() {
            let temp_dir = TempDir::new().unwrap();
            let missing = temp_dir.path().join("absent");
            let pattern = Regex::new(".*").unwrap();

            let err = list_source_files(&missing, &pattern).unwrap_err();
            assert!(matches!(err, ParseError::Io { .. }), "Got {:?}", err);
            assert_eq!(err.path(), Some(missing.as_path()));
        }

        #[test]
        fn test_read_file_content_reports_path() {
            let temp_dir = TempDir::new().unwrap();
            let missing = temp_dir.path().join("gone.go");
            let err = read_file_content(&missing).unwrap_err();
            assert!(err.to_string().contains("gone.go"));
        }
    }
}

/// Build constraint handling (single exclusion marker)
pub mod build_constraints;
