//! Flat row record extracted from one `variable` or `output` block.

use crate::domain::entities::document::Node;

/// Metadata of a single declared variable or output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleItem {
    pub name: String,
    pub description: String,
    pub var_type: String,
    pub default: Option<Node>,
    pub required: bool,
    pub sensitive: bool,
}

impl ModuleItem {
    /// Build an item from a block label and its body.
    ///
    /// Fields with an unexpected shape are treated as absent.
    pub fn from_block(name: impl Into<String>, body: &Node) -> Self {
        let description = body
            .get("description")
            .and_then(Node::as_str)
            .unwrap_or_default()
            .to_owned();
        let var_type = body
            .get("type")
            .and_then(Node::as_str)
            .map(strip_interpolation)
            .unwrap_or_default()
            .to_owned();
        let default = body.get("default").cloned();
        let sensitive = body
            .get("sensitive")
            .and_then(Node::as_bool)
            .unwrap_or(false);

        Self {
            name: name.into(),
            description,
            var_type,
            required: default.is_none(),
            default,
            sensitive,
        }
    }

    /// Text shown in the `Default` column.
    pub fn default_display(&self) -> String {
        match &self.default {
            None => String::new(),
            Some(Node::String(s)) if s.is_empty() => "\"\"".into(),
            Some(Node::String(s)) => s.clone(),
            Some(other) => other.to_inline(),
        }
    }
}

/// Parsers render non-literal expressions such as `type = list(string)` as
/// `${list(string)}`; only the inner expression is wanted.
fn strip_interpolation(raw: &str) -> &str {
    raw.trim()
        .strip_prefix("${")
        .and_then(|s| s.strip_suffix('}'))
        .map_or(raw.trim(), str::trim)
}
