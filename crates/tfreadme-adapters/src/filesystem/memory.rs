//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tfreadme_core::{
    application::{ApplicationError, ports::Filesystem},
    error::TfReadmeResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep a handle after boxing
/// one into a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.files.read().ok()?.get(path).cloned()
    }

    /// Paths of every stored file (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> TfReadmeResult<String> {
        self.read_file(path).ok_or_else(|| {
            ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> TfReadmeResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "memory filesystem lock poisoned".into(),
            })?;

        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }
}
