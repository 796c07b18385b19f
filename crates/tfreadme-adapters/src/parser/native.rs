//! Native Terraform syntax via `hcl-rs`.

use std::path::Path;

use tfreadme_core::{application::ports::DocumentParser, domain::Node, error::TfReadmeResult};
use tracing::{debug, instrument};

use super::parse_error;

/// Parser for `.tf` files.
///
/// Labelled blocks become nested objects keyed by label. Non-literal
/// expressions (`type = list(string)`) come through as interpolation
/// strings such as `${list(string)}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HclParser;

impl HclParser {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentParser for HclParser {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn parse(&self, source: &str, path: &Path) -> TfReadmeResult<Node> {
        let value: hcl::Value = hcl::from_str(source).map_err(|e| parse_error(path, e))?;
        debug!(bytes = source.len(), "Parsed HCL document");
        Ok(to_node(value))
    }
}

fn to_node(value: hcl::Value) -> Node {
    match value {
        hcl::Value::Null => Node::Null,
        hcl::Value::Bool(b) => Node::Bool(b),
        hcl::Value::Number(n) => Node::Number(n.to_string()),
        hcl::Value::String(s) => Node::String(s),
        hcl::Value::Array(items) => Node::Array(items.into_iter().map(to_node).collect()),
        hcl::Value::Object(map) => {
            Node::Object(map.into_iter().map(|(k, v)| (k, to_node(v))).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfreadme_core::domain::{BlockKind, extract_items};
    use tfreadme_core::error::ErrorCategory;

    const VARIABLES: &str = r#"
variable "region" {
  description = "AWS region"
  type        = string
  default     = "us-east-1"
}

variable "instance_count" {
  type    = number
  default = 2
}

variable "subnet_ids" {
  description = "Subnets to place instances in"
  type        = list(string)
}
"#;

    const OUTPUTS: &str = r#"
output "vpc_id" {
  description = "ID of the VPC"
  value       = aws_vpc.this.id
}

output "db_password" {
  value     = random_password.db.result
  sensitive = true
}
"#;

    fn parse(source: &str) -> Node {
        HclParser::new()
            .parse(source, Path::new("test.tf"))
            .unwrap()
    }

    #[test]
    fn variables_are_extracted_in_order() {
        let items = extract_items(&parse(VARIABLES), BlockKind::Variable).unwrap();

        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["region", "instance_count", "subnet_ids"]);

        assert_eq!(items[0].description, "AWS region");
        assert_eq!(items[0].var_type, "string");
        assert_eq!(items[0].default_display(), "us-east-1");
        assert!(!items[0].required);

        assert_eq!(items[1].var_type, "number");
        assert_eq!(items[1].default_display(), "2");
        assert!(!items[1].required);

        assert!(items[2].var_type.starts_with("list("));
        assert!(items[2].required);
    }

    #[test]
    fn outputs_carry_sensitivity() {
        let items = extract_items(&parse(OUTPUTS), BlockKind::Output).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "vpc_id");
        assert_eq!(items[0].description, "ID of the VPC");
        assert!(!items[0].sensitive);
        assert_eq!(items[1].name, "db_password");
        assert!(items[1].sensitive);
    }

    #[test]
    fn empty_file_has_no_blocks() {
        let items = extract_items(&parse(""), BlockKind::Variable).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn syntax_error_is_parse_failure() {
        let err = HclParser::new()
            .parse("variable \"broken\" {", Path::new("variables.tf"))
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("variables.tf"));
    }
}
