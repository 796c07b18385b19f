//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not document
//! shape problems. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Source file could not be found.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Configuration document could not be parsed.
    #[error("Failed to parse {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    /// Markdown rendering failed.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Destination already exists and overwriting was not requested.
    #[error("Output file already exists at {path}")]
    OutputExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileNotFound { path } => vec![
                format!("No such file: {}", path.display()),
                "Run tfreadme from the module directory".into(),
                "Or point at the files with --variables / --outputs".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check file permissions".into(),
            ],
            Self::ParseFailed { path, .. } => vec![
                format!("Check the syntax of {}", path.display()),
                "Run `terraform fmt` to locate syntax errors".into(),
                "Files ending in .json are read as Terraform JSON syntax".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
            ],
            Self::RenderingFailed { .. } => vec!["This is likely a bug in tfreadme".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::ParseFailed { .. } | Self::OutputExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
