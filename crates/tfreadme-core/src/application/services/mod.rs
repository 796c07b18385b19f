//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a module README".

pub mod readme_service;

pub use readme_service::{ReadmeRequest, ReadmeService};
