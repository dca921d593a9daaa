use serde::{Deserialize, Serialize};

/// The editor-facing node/edge structure, derived from a
/// [`WorkflowDocument`](crate::document::WorkflowDocument) and reducible
/// back to it. Rendering and layout happen outside this crate; the graph is
/// handed out as a read-only snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualGraph {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
}

/// Canvas position, floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A node as the editor view renders it. `id` always equals the underlying
/// record's id; everything the view needs beyond position lives in `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualNode {
    pub id: String,
    /// Fixed renderer type tag.
    #[serde(rename = "type", default = "custom_tag")]
    pub node_type: String,
    pub position: Position,
    pub data: NodeData,
}

fn custom_tag() -> String {
    "custom".to_string()
}

/// The data bag carried by a visual node.
///
/// `node_id` duplicates the outer id so view-side handlers can work from the
/// bag alone; `node_key` is the document-side addressing key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub action_display_name: String,
    #[serde(default)]
    pub node_key: String,
    #[serde(default)]
    pub node_id: String,
    #[serde(default)]
    pub integration_type: String,
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub input_ports: Vec<String>,
    #[serde(default)]
    pub output_ports: Vec<String>,
}

/// A directed edge between two visual nodes, attached to named ports.
///
/// Handles are optional on the wire; absent means the `"main"` port on both
/// conversion directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        alias = "source_handle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
    #[serde(
        rename = "targetHandle",
        alias = "target_handle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_handle: Option<String>,
}

impl VisualEdge {
    /// Source port name, defaulting to `"main"` when the handle is absent.
    pub fn source_port(&self) -> &str {
        self.source_handle.as_deref().unwrap_or("main")
    }

    /// Target port name, defaulting to `"main"` when the handle is absent.
    pub fn target_port(&self) -> &str {
        self.target_handle.as_deref().unwrap_or("main")
    }

    /// Whether this edge starts or ends at the given node id.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
