use crate::document::{ConnectionMap, ConnectionTarget, NodeRecord, WorkflowDocument};
use crate::graph::{VisualEdge, VisualGraph};
use ahash::AHashMap;
use itertools::Itertools;

/// Project the visual graph back onto the canonical document.
///
/// Only `nodes` and `connections` are replaced; `id`, `name`, `version` and
/// `variables` pass through from `base`, so callers must pass their most
/// recent document or those fields are lost.
pub fn to_document(base: &WorkflowDocument, graph: &VisualGraph) -> WorkflowDocument {
    let id_to_key: AHashMap<&str, &str> = graph
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node_key_of(node)))
        .collect();

    let nodes = graph
        .nodes
        .iter()
        .map(|node| NodeRecord {
            // The id assigned at creation survives every round-trip.
            id: if node.data.node_id.is_empty() {
                node.id.clone()
            } else {
                node.data.node_id.clone()
            },
            key: node_key_of(node).to_string(),
            name: node.data.label.clone(),
            node_type: node.data.integration_type.clone(),
            params: node.data.params.clone(),
            x: node.position.x,
            y: node.position.y,
        })
        .collect();

    WorkflowDocument {
        id: base.id.clone(),
        name: base.name.clone(),
        version: base.version,
        variables: base.variables.clone(),
        nodes,
        connections: edges_to_connections(&graph.edges, &id_to_key),
    }
}

fn node_key_of(node: &crate::graph::VisualNode) -> &str {
    if node.data.node_key.is_empty() {
        &node.id
    } else {
        &node.data.node_key
    }
}

/// Rebuild the connection map from edges, grouped by resolved source key and
/// source handle; per-group target order follows edge order.
fn edges_to_connections(edges: &[VisualEdge], id_to_key: &AHashMap<&str, &str>) -> ConnectionMap {
    let grouped = edges
        .iter()
        .map(|edge| {
            let source_key = resolve_key(id_to_key, &edge.source);
            let from_port = edge.source_port().to_string();
            let target = ConnectionTarget {
                to: resolve_key(id_to_key, &edge.target),
                to_port: edge.target_port().to_string(),
                from: source_key.clone(),
                from_port: from_port.clone(),
            };
            ((source_key, from_port), target)
        })
        .into_group_map();

    let mut connections = ConnectionMap::new();
    for ((from, from_port), targets) in grouped {
        connections.entry(from).or_default().insert(from_port, targets);
    }
    connections
}

/// Resolve a visual id back to its node key; an unknown id passes through raw.
fn resolve_key(id_to_key: &AHashMap<&str, &str>, id: &str) -> String {
    id_to_key.get(id).map(|k| k.to_string()).unwrap_or_else(|| id.to_string())
}
