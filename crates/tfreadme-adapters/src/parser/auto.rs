//! Format selection by file extension.

use std::path::Path;

use tfreadme_core::{application::ports::DocumentParser, domain::Node, error::TfReadmeResult};
use tracing::trace;

use super::{HclParser, JsonParser};

/// Dispatches `*.json` to [`JsonParser`] and everything else to [`HclParser`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoParser {
    hcl: HclParser,
    json: JsonParser,
}

impl AutoParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_json(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl DocumentParser for AutoParser {
    fn parse(&self, source: &str, path: &Path) -> TfReadmeResult<Node> {
        if Self::is_json(path) {
            trace!(path = %path.display(), "using JSON syntax");
            self.json.parse(source, path)
        } else {
            trace!(path = %path.display(), "using native syntax");
            self.hcl.parse(source, path)
        }
    }
}
