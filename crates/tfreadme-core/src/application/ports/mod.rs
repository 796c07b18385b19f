//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `tfreadme-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `DocumentParser`: Configuration language parsing
//!   - `ReadmeRenderer`: Markdown rendering
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DocumentParser, Filesystem, ReadmeRenderer};

#[cfg(test)]
pub use output::{MockDocumentParser, MockFilesystem, MockReadmeRenderer};
