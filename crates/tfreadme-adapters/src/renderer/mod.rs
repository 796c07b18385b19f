//! Markdown rendering adapters.

mod markdown;
pub mod table;

pub use markdown::MarkdownRenderer;
pub use table::{Align, Cell, Column, MarkdownTable};
