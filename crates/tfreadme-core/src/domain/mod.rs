// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for tfreadme.
//!
//! This module contains pure logic with ZERO external dependencies beyond
//! `thiserror` and `tracing`. Reading files, parsing configuration languages
//! and producing markdown are handled via ports defined in the application
//! layer.
//!
//! ## Pipeline
//!
//! ```text
//! Node (parsed document) ──extract_items──▶ Vec<ModuleItem> ──▶ Readme
//! ```
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod extract;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{document::Node, item::ModuleItem, readme::Readme};
pub use error::DomainError;
pub use extract::extract_items;
pub use value_objects::{BlockKind, Section};
