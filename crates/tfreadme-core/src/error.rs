//! Unified error handling for tfreadme core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for tfreadme core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TfReadmeError {
    /// Errors from the application layer (I/O, parsing, rendering).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected document shape, tied to the file it came from.
    #[error("{path}: {source}")]
    InFile {
        path: std::path::PathBuf,
        #[source]
        source: DomainError,
    },
}

impl TfReadmeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InFile { source, .. } => source.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InFile { .. } => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type TfReadmeResult<T> = Result<T, TfReadmeError>;

/// Extension trait for tying domain errors to a source file.
pub trait InFileExt<T> {
    fn in_file(self, path: &std::path::Path) -> TfReadmeResult<T>;
}

impl<T> InFileExt<T> for Result<T, DomainError> {
    fn in_file(self, path: &std::path::Path) -> TfReadmeResult<T> {
        self.map_err(|source| TfReadmeError::InFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    #[test]
    fn in_file_keeps_category_and_path() {
        let result: Result<(), DomainError> =
            Err(DomainError::RootNotObject { found: "array" });
        let err = result.in_file(Path::new("variables.tf")).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().starts_with("variables.tf: "));
    }

    #[test]
    fn application_categories_pass_through() {
        let err: TfReadmeError = ApplicationError::FileNotFound {
            path: PathBuf::from("outputs.tf"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("--outputs")));
    }
}
