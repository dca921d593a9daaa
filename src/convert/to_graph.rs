use super::identity;
use super::ports::resolve_ports;
use crate::catalog::Catalog;
use crate::document::{ConnectionMap, WorkflowDocument};
use crate::graph::{NodeData, Position, VisualEdge, VisualGraph, VisualNode};
use ahash::{AHashMap, AHashSet};
use tracing::warn;

/// Convert the canonical document into the visual graph.
///
/// Pure and infallible: unresolvable node types get default ports, records
/// without an id get a synthesized one, and connection endpoints that match
/// no node key degrade to the raw key string (the resulting edge may dangle;
/// the presentation layer tolerates or filters it).
pub fn to_graph(document: &WorkflowDocument, catalog: &Catalog) -> VisualGraph {
    let mut key_to_id: AHashMap<&str, String> = AHashMap::with_capacity(document.nodes.len());
    let mut nodes = Vec::with_capacity(document.nodes.len());

    for record in &document.nodes {
        let resolved = resolve_ports(&record.node_type, catalog);
        let node_id = if record.id.is_empty() {
            // Only documents authored outside the editor lack ids.
            identity::node_id()
        } else {
            record.id.clone()
        };
        key_to_id.insert(record.effective_key(), node_id.clone());

        nodes.push(VisualNode {
            id: node_id.clone(),
            node_type: "custom".to_string(),
            position: Position {
                x: record.x,
                y: record.y,
            },
            data: NodeData {
                label: record.name.clone(),
                action_display_name: resolved.display_name,
                node_key: record.effective_key().to_string(),
                node_id,
                integration_type: record.node_type.clone(),
                params: record.params.clone(),
                input_ports: resolved.input_ports,
                output_ports: resolved.output_ports,
            },
        });
    }

    let edges = connections_to_edges(&document.connections, &key_to_id);
    VisualGraph { nodes, edges }
}

/// Emit one edge per connection target, in per-port target order.
///
/// Edge identity is a pure function of its resolved endpoints and ports, so
/// duplicate targets would collide; validation rejects them up front, and
/// any that still arrive are skipped first-wins.
fn connections_to_edges(
    connections: &ConnectionMap,
    key_to_id: &AHashMap<&str, String>,
) -> Vec<VisualEdge> {
    let mut edges = Vec::new();
    let mut seen: AHashSet<String> = AHashSet::new();

    for (from_key, ports) in connections {
        for (from_port, targets) in ports {
            for target in targets {
                let source = resolve_endpoint(key_to_id, from_key);
                let dest = resolve_endpoint(key_to_id, &target.to);
                let id = format!("e{}-{}-{}-{}", source, from_port, dest, target.to_port);
                if !seen.insert(id.clone()) {
                    warn!(edge = %id, "skipping duplicate connection target");
                    continue;
                }
                edges.push(VisualEdge {
                    id,
                    source,
                    target: dest,
                    source_handle: Some(from_port.clone()),
                    target_handle: Some(target.to_port.clone()),
                });
            }
        }
    }

    edges
}

/// Resolve a node key to its visual id; an unknown key passes through raw.
fn resolve_endpoint(key_to_id: &AHashMap<&str, String>, key: &str) -> String {
    match key_to_id.get(key) {
        Some(id) => id.clone(),
        None => {
            warn!(key, "connection endpoint does not resolve to any node");
            key.to_string()
        }
    }
}
