//! Infrastructure adapters for tfreadme.
//!
//! This crate implements the ports defined in `tfreadme-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod parser;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use parser::{AutoParser, HclParser, JsonParser};
pub use renderer::MarkdownRenderer;
