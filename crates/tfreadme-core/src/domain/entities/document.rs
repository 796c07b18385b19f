//! Generic parsed document tree.
//!
//! Parsers live outside the core; whatever they produce (HCL values, JSON
//! values) is converted into a [`Node`] before extraction ever sees it.

use std::fmt::{self, Write as _};

/// A node of a parsed configuration document.
///
/// Objects keep their keys in declaration order. Duplicate keys are kept as
/// written; [`Node::get`] returns the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Null,
    Bool(bool),
    /// Textual form of the number as the parser reported it.
    Number(String),
    String(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl Node {
    /// Build an object node from `(key, value)` pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a string node.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Value stored under `key`, if this is an object that has one.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Self::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Render the node as a single-line literal.
    ///
    /// Strings are quoted, objects use HCL's `{ key = value }` form.
    pub fn to_inline(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_inline(&mut out);
        out
    }

    fn write_inline(&self, out: &mut String) -> fmt::Result {
        match self {
            Self::Null => out.write_str("null"),
            Self::Bool(b) => write!(out, "{b}"),
            Self::Number(n) => out.write_str(n),
            Self::String(s) => write!(out, "{s:?}"),
            Self::Array(items) => {
                out.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    item.write_inline(out)?;
                }
                out.write_char(']')
            }
            Self::Object(entries) if entries.is_empty() => out.write_str("{}"),
            Self::Object(entries) => {
                out.write_str("{ ")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    write!(out, "{key} = ")?;
                    value.write_inline(out)?;
                }
                out.write_str(" }")
            }
        }
    }
}
