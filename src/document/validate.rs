use super::model::WorkflowDocument;
use crate::error::DocumentError;
use ahash::AHashSet;

/// Structural validation applied before a document replaces the current one.
///
/// Unresolvable connection endpoints and unknown node types are deliberately
/// not checked here; those degrade gracefully at conversion time. Only the
/// two properties that would corrupt identity tracking are rejected:
/// duplicate node keys and duplicate connection targets.
pub fn validate(document: &WorkflowDocument) -> Result<(), DocumentError> {
    let mut keys: AHashSet<&str> = AHashSet::with_capacity(document.nodes.len());
    for node in &document.nodes {
        let key = node.effective_key();
        if !key.is_empty() && !keys.insert(key) {
            return Err(DocumentError::DuplicateNodeKey {
                key: key.to_string(),
            });
        }
    }

    let mut seen: AHashSet<(&str, &str, &str, &str)> = AHashSet::new();
    for (from, from_port, target) in document.iter_targets() {
        if !seen.insert((from, from_port, target.to.as_str(), target.to_port.as_str())) {
            return Err(DocumentError::DuplicateConnection {
                from: from.to_string(),
                from_port: from_port.to_string(),
                to: target.to.clone(),
                to_port: target.to_port.clone(),
            });
        }
    }

    Ok(())
}
