//! Filesystem Utilities.
//!
//! Thin wrappers over `std::fs` that report failures as
//! [`CoreError::Filesystem`] together with the offending path.

use crate::error::CoreError;
use std::fs;
use std::io;
use std::path::Path;

/// Ensures that a directory exists at the given path, creating it and any
/// missing parents when needed.
///
/// # Errors
///
/// Returns [`CoreError::Filesystem`] if the path exists but is not a directory,
/// or if creating it fails.
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::AlreadyExists, "Path exists but is not a directory"),
            })
        }
    } else {
        fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Reads the entire contents of a file into a string.
///
/// # Errors
///
/// Returns [`CoreError::Filesystem`] wrapping the underlying I/O error.
pub fn read_to_string(path: &Path) -> Result<String, CoreError> {
    fs::read_to_string(path).map_err(|e| CoreError::Filesystem {
        message: "Failed to read file to string".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn ensure_dir_exists_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("logs").join("notibell");

        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call on an existing directory is fine.
        ensure_dir_exists(&nested).unwrap();
    }

    #[test]
    fn ensure_dir_exists_rejects_regular_file() {
        let file = NamedTempFile::new().unwrap();
        match ensure_dir_exists(file.path()) {
            Err(CoreError::Filesystem { path, source, .. }) => {
                assert_eq!(path, file.path());
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("expected Filesystem error, got {:?}", other),
        }
    }

    #[test]
    fn read_to_string_returns_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[bell]\nbadge_cap = 9\n").unwrap();
        assert_eq!(read_to_string(file.path()).unwrap(), "[bell]\nbadge_cap = 9\n");
    }

    #[test]
    fn read_to_string_missing_file_is_filesystem_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = read_to_string(&missing).unwrap_err();
        assert!(matches!(err, CoreError::Filesystem { .. }));
        let io_err = err.source().and_then(|s| s.downcast_ref::<io::Error>()).unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }
}
