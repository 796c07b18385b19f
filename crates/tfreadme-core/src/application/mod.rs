//! Application layer for tfreadme.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ReadmeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! extraction logic itself. That lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ReadmeRequest, ReadmeService};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentParser, Filesystem, ReadmeRenderer};

pub use error::ApplicationError;
