use crate::error::DocumentError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// Connections, keyed by source node key, then by source port name, each
/// holding an ordered list of targets.
pub type ConnectionMap = AHashMap<String, AHashMap<String, Vec<ConnectionTarget>>>;

/// The canonical, persistable workflow representation.
///
/// This is the single source of truth: the visual graph is derived from it
/// and reducible back to it. The host supplies one at session start
/// (possibly empty) and receives the exported form on explicit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u64,
    #[serde(default)]
    pub variables: AHashMap<String, serde_json::Value>,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub connections: ConnectionMap,
}

fn default_version() -> u64 {
    1
}

impl Default for WorkflowDocument {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            version: default_version(),
            variables: AHashMap::new(),
            nodes: Vec::new(),
            connections: ConnectionMap::new(),
        }
    }
}

/// One action instance in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Opaque, globally unique, assigned once at creation and never
    /// regenerated. The only stable cross-representation identity.
    #[serde(default)]
    pub id: String,
    /// Human-meaningful, unique within the document; the addressable
    /// endpoint in `connections`. Empty means "use `id`".
    #[serde(default)]
    pub key: String,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Composite `"<integration>.<action>"` type.
    #[serde(rename = "type", default)]
    pub node_type: String,
    /// Arbitrary parameter object, opaque to this crate.
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl NodeRecord {
    /// The key this node is addressed by in `connections`; falls back to the
    /// id when no key was assigned.
    pub fn effective_key(&self) -> &str {
        if self.key.is_empty() {
            &self.id
        } else {
            &self.key
        }
    }
}

/// One directed edge description inside `connections`: from a source port to
/// a destination node/port. `from`/`from_port` are redundant with the map
/// position but retained in the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub to: String,
    #[serde(default = "default_port")]
    pub to_port: String,
    #[serde(default)]
    pub from: String,
    #[serde(default = "default_port")]
    pub from_port: String,
}

fn default_port() -> String {
    "main".to_string()
}

impl WorkflowDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))
    }

    /// Load a document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)
            .map_err(|e| DocumentError::JsonParseError(format!("Could not read '{}': {}", path, e)))?;
        Self::from_json(&content)
    }

    /// Serialize to pretty-printed JSON, the form offered for download.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::SerializeError(e.to_string()))
    }

    /// Look up a node by its effective key.
    pub fn node_by_key(&self, key: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|n| n.effective_key() == key)
    }

    /// Every connection as a flat `(source key, source port, target)` view,
    /// using the map position as the authoritative source endpoint.
    pub fn iter_targets(&self) -> impl Iterator<Item = (&str, &str, &ConnectionTarget)> {
        self.connections.iter().flat_map(|(from, ports)| {
            ports.iter().flat_map(move |(port, targets)| {
                targets
                    .iter()
                    .map(move |t| (from.as_str(), port.as_str(), t))
            })
        })
    }
}
