//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tfreadme-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Node, Readme};
use crate::error::TfReadmeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tfreadme_adapters::filesystem::LocalFilesystem` (production)
/// - `tfreadme_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> TfReadmeResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> TfReadmeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for turning configuration source text into a generic tree.
///
/// Implemented by:
/// - `tfreadme_adapters::parser::HclParser` (native syntax)
/// - `tfreadme_adapters::parser::JsonParser` (`.tf.json`)
/// - `tfreadme_adapters::parser::AutoParser` (picks one by file extension)
#[cfg_attr(test, mockall::automock)]
pub trait DocumentParser: Send + Sync {
    /// Parse `source`, read from `path`. The path is used for format
    /// detection and error messages only.
    fn parse(&self, source: &str, path: &Path) -> TfReadmeResult<Node>;
}

/// Port for README rendering.
///
/// Implemented by:
/// - `tfreadme_adapters::renderer::MarkdownRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait ReadmeRenderer: Send + Sync {
    /// Render the complete document.
    fn render(&self, readme: &Readme) -> TfReadmeResult<String>;
}
