//! Terraform JSON syntax (`*.tf.json`) via `serde_json`.

use std::path::Path;

use tfreadme_core::{application::ports::DocumentParser, domain::Node, error::TfReadmeResult};
use tracing::{debug, instrument};

use super::parse_error;

/// Parser for `.tf.json` files. Object key order is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl JsonParser {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentParser for JsonParser {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn parse(&self, source: &str, path: &Path) -> TfReadmeResult<Node> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(|e| parse_error(path, e))?;
        debug!(bytes = source.len(), "Parsed JSON document");
        Ok(to_node(value))
    }
}

fn to_node(value: serde_json::Value) -> Node {
    use serde_json::Value;

    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => Node::Number(n.to_string()),
        Value::String(s) => Node::String(s),
        Value::Array(items) => Node::Array(items.into_iter().map(to_node).collect()),
        Value::Object(map) => {
            Node::Object(map.into_iter().map(|(k, v)| (k, to_node(v))).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfreadme_core::domain::{BlockKind, extract_items};

    #[test]
    fn tf_json_variables() {
        let source = r#"{
            "variable": {
                "zone": { "type": "string", "description": "DNS zone" },
                "tags": { "type": "map(string)", "default": { "team": "core" } }
            }
        }"#;

        let node = JsonParser::new()
            .parse(source, Path::new("variables.tf.json"))
            .unwrap();
        let items = extract_items(&node, BlockKind::Variable).unwrap();

        assert_eq!(items[0].name, "zone");
        assert!(items[0].required);
        assert_eq!(items[1].name, "tags");
        assert_eq!(items[1].var_type, "map(string)");
        assert_eq!(items[1].default_display(), "{ team = \"core\" }");
    }

    #[test]
    fn invalid_json_is_parse_failure() {
        let err = JsonParser::new()
            .parse("{ \"variable\": ", Path::new("variables.tf.json"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse variables.tf.json"));
    }
}
