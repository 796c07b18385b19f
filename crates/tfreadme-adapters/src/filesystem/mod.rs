//! [`Filesystem`](tfreadme_core::application::ports::Filesystem) adapters:
//! the real disk for the binary, a map in memory for tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
