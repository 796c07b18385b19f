//! Configuration document parsers.
//!
//! Parsing itself is delegated to `hcl-rs` and `serde_json`; these adapters
//! only convert the parsed value into the core's [`Node`] tree.
//!
//! [`Node`]: tfreadme_core::domain::Node

mod auto;
mod json;
mod native;

pub use auto::AutoParser;
pub use json::JsonParser;
pub use native::HclParser;

use std::path::Path;

use tfreadme_core::{application::ApplicationError, error::TfReadmeError};

fn parse_error(path: &Path, reason: impl std::fmt::Display) -> TfReadmeError {
    ApplicationError::ParseFailed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}
