//! Common test utilities for building documents, graphs, and catalogs.
use flowdoc::prelude::*;

/// A catalog with two integrations, one action each. The `email.send_email`
/// action declares explicit ports; `http.request` omits them to exercise the
/// per-side defaults.
#[allow(dead_code)]
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Integration {
            name: "email".to_string(),
            display_name: "Email".to_string(),
            actions: vec![ActionSpec {
                key: "send_email".to_string(),
                display_name: "Send Email".to_string(),
                input_ports: Some(vec!["main".to_string()]),
                output_ports: Some(vec!["sent".to_string(), "error".to_string()]),
            }],
        },
        Integration {
            name: "http".to_string(),
            display_name: "HTTP".to_string(),
            actions: vec![ActionSpec {
                key: "request".to_string(),
                display_name: "HTTP Request".to_string(),
                input_ports: None,
                output_ports: None,
            }],
        },
    ])
}

/// The two-node trigger -> HTTP document: `t1:main -> h1:main`.
#[allow(dead_code)]
pub fn two_node_document() -> WorkflowDocument {
    WorkflowDocument::from_json(
        r#"{
            "id": "wf1",
            "name": "Sample",
            "version": 1,
            "variables": {},
            "nodes": [
                {"id": "n1", "key": "t1", "name": "Trigger", "type": "manual.trigger", "params": {}, "x": 0.0, "y": 0.0},
                {"id": "n2", "key": "h1", "name": "HTTP", "type": "http.request", "params": {}, "x": 100.0, "y": 100.0}
            ],
            "connections": {
                "t1": {"main": [{"to": "h1", "from": "t1", "to_port": "main", "from_port": "main"}]}
            }
        }"#,
    )
    .expect("fixture document must parse")
}

/// Flattens a document's connections into sortable `(from, from_port, to,
/// to_port)` tuples for multiset comparison.
#[allow(dead_code)]
pub fn connection_tuples(document: &WorkflowDocument) -> Vec<(String, String, String, String)> {
    let mut tuples: Vec<_> = document
        .iter_targets()
        .map(|(from, port, t)| {
            (
                from.to_string(),
                port.to_string(),
                t.to.clone(),
                t.to_port.clone(),
            )
        })
        .collect();
    tuples.sort();
    tuples
}
