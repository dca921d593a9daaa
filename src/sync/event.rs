use crate::document::WorkflowDocument;
use crate::graph::{Position, VisualEdge, VisualNode};

/// An edit event routed through the coordinator: one variant per view edit
/// source plus the structural node operations from the presentation layer.
/// The union is exhaustive and every payload is explicit; the coordinator's
/// `dispatch` is a single match over it.
#[derive(Debug, Clone)]
pub enum EditEvent {
    /// The visual view replaced its nodes/edges (drag, connect, disconnect).
    GraphEdited {
        nodes: Vec<VisualNode>,
        edges: Vec<VisualEdge>,
    },
    /// The raw-text view produced a parsed replacement document.
    DocumentEdited { document: WorkflowDocument },
    /// The title field changed.
    TitleEdited { title: String },
    /// A node type was picked from the browse panel.
    NodeAdded {
        action: String,
        integration: String,
    },
    /// The per-node editor submitted a partial update.
    NodeUpdated {
        node_id: String,
        update: NodeUpdate,
    },
    NodeDeleted { node_id: String },
}

/// A partial update merged into a visual node's position and data bag.
/// `node_key`/`node_id` are re-synchronized explicitly when present so
/// connection rebuilding resolves against the updated identity.
#[derive(Debug, Clone, Default)]
pub struct NodeUpdate {
    pub position: Option<Position>,
    pub label: Option<String>,
    pub node_key: Option<String>,
    pub node_id: Option<String>,
    pub integration_type: Option<String>,
    pub params: Option<serde_json::Map<String, serde_json::Value>>,
}
