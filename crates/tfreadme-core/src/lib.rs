//! tfreadme Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the tfreadme
//! Terraform module documentation tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          tfreadme-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ReadmeService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, DocumentParser, Renderer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   tfreadme-adapters (Infrastructure)    │
//! │  (HclParser, MarkdownRenderer, etc)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │      (Node, ModuleItem, Readme)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tfreadme_core::application::{ReadmeRequest, ReadmeService};
//!
//! let service = ReadmeService::new(filesystem, parser, renderer);
//! let markdown = service
//!     .generate(&ReadmeRequest::new("network", "variables.tf", "outputs.tf"))
//!     .unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ReadmeRequest, ReadmeService,
        ports::{DocumentParser, Filesystem, ReadmeRenderer},
    };
    pub use crate::domain::{BlockKind, ModuleItem, Node, Readme, Section};
    pub use crate::error::{TfReadmeError, TfReadmeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
