use tracing::{debug, trace};

use crate::domain::{
    entities::{document::Node, item::ModuleItem},
    error::DomainError,
    value_objects::BlockKind,
};

/// Pull every `kind` block out of a parsed document.
///
/// Parsers disagree on how repeated blocks are represented, so both shapes
/// are accepted at each level:
///
/// ```text
/// { "variable": { "a": {..}, "b": {..} } }
/// { "variable": [ { "a": [ {..} ] }, { "b": [ {..} ] } ] }
/// ```
///
/// A document without any `kind` block yields an empty list. Items come out
/// in declaration order.
pub fn extract_items(root: &Node, kind: BlockKind) -> Result<Vec<ModuleItem>, DomainError> {
    if !matches!(root, Node::Object(_)) {
        return Err(DomainError::RootNotObject { found: root.kind() });
    }

    let Some(blocks) = root.get(kind.identifier()) else {
        debug!(block = %kind, "no blocks in document");
        return Ok(Vec::new());
    };

    let mut items = Vec::new();
    for labelled in objects(blocks, kind, "an object of labelled blocks")? {
        let Node::Object(entries) = labelled else {
            continue;
        };
        for (name, value) in entries {
            for body in objects(value, kind, "a block body")? {
                trace!(block = %kind, name = %name, "extracted block");
                items.push(ModuleItem::from_block(name.as_str(), body));
            }
        }
    }

    Ok(items)
}

/// Accept either a single object or an array of objects.
fn objects<'a>(
    node: &'a Node,
    kind: BlockKind,
    expected: &'static str,
) -> Result<Vec<&'a Node>, DomainError> {
    let invalid = |found: &Node| DomainError::InvalidStructure {
        block: kind.identifier().to_owned(),
        expected,
        found: found.kind(),
    };

    match node {
        Node::Object(_) => Ok(vec![node]),
        Node::Array(items) => items
            .iter()
            .map(|item| match item {
                Node::Object(_) => Ok(item),
                other => Err(invalid(other)),
            })
            .collect(),
        other => Err(invalid(other)),
    }
}
