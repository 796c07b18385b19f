// ============================================================================
// domain/error.rs - DOCUMENT SHAPE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Raised when a parsed document does not have the shape the extraction
/// expects. Reported as a validation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("document root must be an object, found {found}")]
    RootNotObject { found: &'static str },

    #[error("invalid '{block}' block structure: expected {expected}, found {found}")]
    InvalidStructure {
        block: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RootNotObject { .. } => vec![
                "The file does not look like a Terraform configuration".into(),
                "Check that --variables / --outputs point at .tf or .tf.json files".into(),
            ],
            Self::InvalidStructure { block, .. } => vec![
                format!("Each '{block}' block needs exactly one label, e.g. {block} \"name\" {{ ... }}"),
                "Run `terraform validate` on the module".into(),
            ],
        }
    }
}
