//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tfreadme_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{TfReadmeError, TfReadmeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> TfReadmeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> TfReadmeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> TfReadmeError {
    if e.kind() == io::ErrorKind::NotFound {
        return ApplicationError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into();
    }

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfreadme_core::error::ErrorCategory;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        let fs = LocalFilesystem::new();

        assert!(!fs.exists(&path));
        fs.write_file(&path, "# Title\n").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("variables.tf"))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
