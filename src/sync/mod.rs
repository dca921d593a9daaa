pub mod event;
pub mod lock;
pub mod pane;
pub mod timer;

pub use event::*;
pub use lock::*;
pub use pane::{TextPane, DEFAULT_QUIET_PERIOD};
pub use timer::{Debouncer, ResetTimer};

use crate::catalog::Catalog;
use crate::convert::{self, identity};
use crate::document::{validate, NodeRecord, WorkflowDocument};
use crate::error::DocumentError;
use crate::graph::{VisualEdge, VisualGraph, VisualNode};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Delay after which the update lock is released. Bounds staleness; it does
/// not wait for the downstream view to acknowledge the update.
pub const LOCK_RESET_DELAY: Duration = Duration::from_millis(50);

/// Canvas position for nodes created from the browse panel.
const DEFAULT_NODE_POSITION: (f64, f64) = (200.0, 200.0);

/// The in-memory state cell owning the canonical document and its derived
/// visual graph.
///
/// All three views (graph, raw text, title) route their edits through the
/// operations here; the coordinator applies the converter and arbitrates
/// near-simultaneous edits with the [`UpdateLock`]. External components only
/// ever see read-only snapshots; no other component mutates the document or
/// graph directly.
///
/// The coordinator never spawns anything: the host event loop supplies the
/// current [`Instant`] to every operation and calls [`tick`](Self::tick) to
/// advance the lock-release timer.
pub struct Coordinator {
    document: WorkflowDocument,
    graph: VisualGraph,
    title: String,
    catalog: Catalog,
    lock: UpdateLock,
    reset: ResetTimer,
}

impl Coordinator {
    /// Take ownership of the host-supplied initial document and catalog,
    /// deriving the visual graph and title.
    pub fn new(document: WorkflowDocument, catalog: Catalog) -> Self {
        let graph = convert::to_graph(&document, &catalog);
        let title = document.name.clone();
        Self {
            document,
            graph,
            title,
            catalog,
            lock: UpdateLock::Idle,
            reset: ResetTimer::new(LOCK_RESET_DELAY),
        }
    }

    pub fn document(&self) -> &WorkflowDocument {
        &self.document
    }

    pub fn graph(&self) -> &VisualGraph {
        &self.graph
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lock(&self) -> UpdateLock {
        self.lock
    }

    /// Route one edit event through the transition function.
    pub fn dispatch(&mut self, event: EditEvent, now: Instant) {
        match event {
            EditEvent::GraphEdited { nodes, edges } => self.on_graph_edited(nodes, edges, now),
            EditEvent::DocumentEdited { document } => self.on_document_edited(document, now),
            EditEvent::TitleEdited { title } => self.on_title_edited(title, now),
            EditEvent::NodeAdded {
                action,
                integration,
            } => self.on_node_added(&action, &integration),
            EditEvent::NodeUpdated { node_id, update } => self.on_node_updated(&node_id, update),
            EditEvent::NodeDeleted { node_id } => self.on_node_deleted(&node_id),
        }
    }

    /// The visual view replaced its nodes and edges.
    pub fn apply_graph_edit(&mut self, nodes: Vec<VisualNode>, edges: Vec<VisualEdge>, now: Instant) {
        self.dispatch(EditEvent::GraphEdited { nodes, edges }, now);
    }

    /// The raw-text view produced a parsed replacement document.
    pub fn apply_document_edit(&mut self, document: WorkflowDocument, now: Instant) {
        self.dispatch(EditEvent::DocumentEdited { document }, now);
    }

    /// Parse settled raw-text content and apply it as a document edit. An
    /// unparseable or structurally invalid edit is discarded and the prior
    /// state retained; surfacing a warning to the user is the presentation
    /// layer's job.
    pub fn apply_raw_edit(&mut self, text: &str, now: Instant) {
        match WorkflowDocument::from_json(text) {
            Ok(document) => self.dispatch(EditEvent::DocumentEdited { document }, now),
            Err(e) => warn!(error = %e, "discarding unparseable raw edit"),
        }
    }

    /// The title field changed.
    pub fn apply_title_edit(&mut self, title: String, now: Instant) {
        self.dispatch(EditEvent::TitleEdited { title }, now);
    }

    /// Create a node from a browse-panel pick and prepend it to the document.
    pub fn add_node(&mut self, action_key: &str, integration_name: &str, now: Instant) {
        self.dispatch(
            EditEvent::NodeAdded {
                action: action_key.to_string(),
                integration: integration_name.to_string(),
            },
            now,
        );
    }

    /// Merge a partial update into one visual node and re-derive the document.
    pub fn update_node(&mut self, node_id: &str, update: NodeUpdate, now: Instant) {
        self.dispatch(
            EditEvent::NodeUpdated {
                node_id: node_id.to_string(),
                update,
            },
            now,
        );
    }

    /// Remove a node and every edge touching it, then re-derive the document.
    pub fn delete_node(&mut self, node_id: &str, now: Instant) {
        self.dispatch(
            EditEvent::NodeDeleted {
                node_id: node_id.to_string(),
            },
            now,
        );
    }

    /// Serialize the current canonical document for external consumption.
    /// Read-only; nothing is pushed anywhere by this crate.
    pub fn export_document(&self) -> Result<String, DocumentError> {
        self.document.to_json_pretty()
    }

    /// Advance the lock-release timer. The host calls this from its event
    /// loop; the lock returns to idle a fixed delay after the last edit,
    /// regardless of further downstream activity.
    pub fn tick(&mut self, now: Instant) {
        if self.reset.fire(now) {
            debug!("update lock released");
            self.lock.release();
        }
    }

    fn on_graph_edited(&mut self, nodes: Vec<VisualNode>, edges: Vec<VisualEdge>, now: Instant) {
        if self.lock.blocks(EditSource::Graph) {
            debug!("dropping reentrant graph edit");
            return;
        }
        self.graph = VisualGraph { nodes, edges };
        self.document = convert::to_document(&self.document, &self.graph);
        self.lock_and_schedule(EditSource::Graph, now);
    }

    fn on_document_edited(&mut self, document: WorkflowDocument, now: Instant) {
        if self.lock.blocks(EditSource::Document) {
            debug!("dropping reentrant document edit");
            return;
        }
        if let Err(e) = validate(&document) {
            warn!(error = %e, "rejecting structurally invalid document edit");
            return;
        }
        self.graph = convert::to_graph(&document, &self.catalog);
        if !document.name.is_empty() {
            self.title = document.name.clone();
        }
        self.document = document;
        self.lock_and_schedule(EditSource::Document, now);
    }

    fn on_title_edited(&mut self, title: String, now: Instant) {
        if self.lock.blocks(EditSource::Title) {
            debug!("dropping reentrant title edit");
            return;
        }
        self.document.name = title.clone();
        self.title = title;
        self.lock_and_schedule(EditSource::Title, now);
    }

    fn on_node_added(&mut self, action_key: &str, integration_name: &str) {
        let Some(integration) = self.catalog.integration(integration_name) else {
            warn!(integration = integration_name, "add_node: unknown integration");
            return;
        };
        let node_type = format!("{}.{}", integration.name, action_key);
        let key = identity::node_key(action_key, |candidate| {
            self.document.node_by_key(candidate).is_some()
        });
        let record = NodeRecord {
            id: identity::node_id(),
            key,
            name: action_key.to_string(),
            node_type,
            params: serde_json::Map::new(),
            x: DEFAULT_NODE_POSITION.0,
            y: DEFAULT_NODE_POSITION.1,
        };
        self.document.nodes.insert(0, record);
        self.graph = convert::to_graph(&self.document, &self.catalog);
    }

    fn on_node_updated(&mut self, node_id: &str, update: NodeUpdate) {
        let Some(node) = self.graph.nodes.iter_mut().find(|n| n.id == node_id) else {
            debug!(node_id, "update_node: no such node");
            return;
        };
        if let Some(position) = update.position {
            node.position = position;
        }
        if let Some(label) = update.label {
            node.data.label = label;
        }
        if let Some(integration_type) = update.integration_type {
            node.data.integration_type = integration_type;
        }
        if let Some(params) = update.params {
            node.data.params = params;
        }
        if let Some(key) = update.node_key {
            node.data.node_key = key;
        }
        if let Some(id) = update.node_id {
            node.data.node_id = id;
        } else if node.data.node_id.is_empty() {
            node.data.node_id = node.id.clone();
        }
        self.document = convert::to_document(&self.document, &self.graph);
    }

    fn on_node_deleted(&mut self, node_id: &str) {
        self.graph.nodes.retain(|n| n.id != node_id);
        self.graph.edges.retain(|e| !e.touches(node_id));
        self.document = convert::to_document(&self.document, &self.graph);
    }

    fn lock_and_schedule(&mut self, source: EditSource, now: Instant) {
        self.lock.acquire(source);
        // Replaces any pending reset; the lock never flaps.
        self.reset.schedule(now);
    }
}
