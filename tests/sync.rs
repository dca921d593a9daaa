//! Tests for the synchronization coordinator: lock discipline, timer reset,
//! debounced raw edits, and the node operations.
mod common;
use common::*;
use flowdoc::prelude::*;
use flowdoc::sync::LOCK_RESET_DELAY;
use std::time::{Duration, Instant};

fn coordinator() -> Coordinator {
    Coordinator::new(two_node_document(), sample_catalog())
}

#[test]
fn test_new_derives_graph_and_title() {
    let coordinator = coordinator();
    assert_eq!(coordinator.title(), "Sample");
    assert_eq!(coordinator.graph().nodes.len(), 2);
    assert_eq!(coordinator.graph().edges.len(), 1);
    assert!(coordinator.lock().is_idle());
}

#[test]
fn test_graph_edit_rederives_document() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    let mut nodes = coordinator.graph().nodes.clone();
    let edges = coordinator.graph().edges.clone();
    nodes[1].position = Position { x: 300.0, y: 50.0 };

    coordinator.apply_graph_edit(nodes, edges, now);

    let moved = coordinator.document().node_by_key("h1").unwrap();
    assert_eq!(moved.x, 300.0);
    assert_eq!(moved.y, 50.0);
    assert_eq!(coordinator.lock(), UpdateLock::Locked(EditSource::Graph));
}

#[test]
fn test_reentrant_graph_edit_is_dropped_until_reset() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    let nodes = coordinator.graph().nodes.clone();
    let edges = coordinator.graph().edges.clone();
    coordinator.apply_graph_edit(nodes.clone(), edges.clone(), now);

    // The render/notify cycle echoes a second graph edit while locked.
    let mut echoed = nodes.clone();
    echoed[0].position = Position { x: -1.0, y: -1.0 };
    coordinator.apply_graph_edit(echoed.clone(), edges.clone(), now);

    let trigger = coordinator.document().node_by_key("t1").unwrap();
    assert_eq!(trigger.x, 0.0, "reentrant edit must not alter state");

    // After the fixed delay the lock resets and the same source is accepted.
    coordinator.tick(now + LOCK_RESET_DELAY);
    assert!(coordinator.lock().is_idle());
    coordinator.apply_graph_edit(echoed, edges, now + LOCK_RESET_DELAY);
    let trigger = coordinator.document().node_by_key("t1").unwrap();
    assert_eq!(trigger.x, -1.0);
}

#[test]
fn test_other_source_accepted_while_locked() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    let nodes = coordinator.graph().nodes.clone();
    let edges = coordinator.graph().edges.clone();
    coordinator.apply_graph_edit(nodes, edges, now);
    assert_eq!(coordinator.lock(), UpdateLock::Locked(EditSource::Graph));

    coordinator.apply_title_edit("Renamed".to_string(), now);
    assert_eq!(coordinator.title(), "Renamed");
    assert_eq!(coordinator.document().name, "Renamed");
    // The lock moves to the newer source.
    assert_eq!(coordinator.lock(), UpdateLock::Locked(EditSource::Title));
}

#[test]
fn test_reset_schedule_replaces_pending() {
    let mut coordinator = coordinator();
    let start = Instant::now();

    coordinator.apply_title_edit("A".to_string(), start);
    // A second, different-source edit re-arms the timer instead of stacking.
    let text = coordinator.document().to_json_pretty().unwrap();
    coordinator.apply_raw_edit(&text, start + Duration::from_millis(30));

    coordinator.tick(start + Duration::from_millis(60));
    assert_eq!(
        coordinator.lock(),
        UpdateLock::Locked(EditSource::Document),
        "first deadline was replaced, lock still held"
    );

    coordinator.tick(start + Duration::from_millis(30) + LOCK_RESET_DELAY);
    assert!(coordinator.lock().is_idle());
}

#[test]
fn test_tick_before_deadline_keeps_lock() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    coordinator.apply_title_edit("A".to_string(), now);
    coordinator.tick(now + Duration::from_millis(10));
    assert_eq!(coordinator.lock(), UpdateLock::Locked(EditSource::Title));
}

#[test]
fn test_invalid_raw_edit_retains_state() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    coordinator.apply_raw_edit("{not json", now);

    assert_eq!(coordinator.document().nodes.len(), 2);
    assert!(coordinator.lock().is_idle(), "rejected edit takes no lock");
}

#[test]
fn test_structurally_invalid_document_edit_is_rejected() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    let mut bad = coordinator.document().clone();
    let duplicate = bad.connections["t1"]["main"][0].clone();
    bad.connections
        .get_mut("t1")
        .unwrap()
        .get_mut("main")
        .unwrap()
        .push(duplicate);

    coordinator.apply_document_edit(bad, now);

    assert_eq!(coordinator.graph().edges.len(), 1, "prior graph retained");
    assert!(coordinator.lock().is_idle());
}

#[test]
fn test_document_edit_refreshes_title_unless_name_empty() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    let mut renamed = coordinator.document().clone();
    renamed.name = "Via JSON".to_string();
    coordinator.apply_document_edit(renamed, now);
    assert_eq!(coordinator.title(), "Via JSON");

    coordinator.tick(now + LOCK_RESET_DELAY);
    let mut unnamed = coordinator.document().clone();
    unnamed.name.clear();
    coordinator.apply_document_edit(unnamed, now + LOCK_RESET_DELAY);
    assert_eq!(coordinator.title(), "Via JSON", "empty name keeps old title");
}

#[test]
fn test_add_node_then_export() {
    let mut coordinator = Coordinator::new(WorkflowDocument::default(), sample_catalog());
    let now = Instant::now();

    coordinator.add_node("send_email", "email", now);

    let document = coordinator.document();
    assert_eq!(document.nodes.len(), 1);
    let record = &document.nodes[0];
    assert_eq!(record.node_type, "email.send_email");
    assert!(!record.key.is_empty());
    assert!(record.key.starts_with("send_email_"));
    assert!(!record.id.is_empty());
    assert_eq!(record.x, 200.0);

    let exported = coordinator.export_document().unwrap();
    let parsed = WorkflowDocument::from_json(&exported).unwrap();
    assert_eq!(parsed.nodes.len(), 1);
    assert_eq!(parsed.nodes[0].node_type, "email.send_email");
}

#[test]
fn test_add_node_prepends_and_keys_stay_unique() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    coordinator.add_node("send_email", "email", now);
    coordinator.add_node("send_email", "email", now);

    let document = coordinator.document();
    assert_eq!(document.nodes.len(), 4);
    // New nodes are prepended.
    assert_eq!(document.nodes[0].node_type, "email.send_email");
    assert_eq!(document.nodes[1].node_type, "email.send_email");
    assert_ne!(document.nodes[0].key, document.nodes[1].key);
    assert_ne!(document.nodes[0].id, document.nodes[1].id);
}

#[test]
fn test_add_node_unknown_integration_is_noop() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    coordinator.add_node("anything", "nope", now);
    assert_eq!(coordinator.document().nodes.len(), 2);
}

#[test]
fn test_update_node_merges_and_rederives() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    let update = NodeUpdate {
        position: Some(Position { x: 42.0, y: 7.0 }),
        label: Some("Renamed HTTP".to_string()),
        ..Default::default()
    };
    coordinator.update_node("n2", update, now);

    let record = coordinator.document().node_by_key("h1").unwrap();
    assert_eq!(record.name, "Renamed HTTP");
    assert_eq!(record.x, 42.0);
    assert_eq!(record.y, 7.0);
}

#[test]
fn test_update_node_key_rewrites_connections() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    let update = NodeUpdate {
        node_key: Some("fetch".to_string()),
        ..Default::default()
    };
    coordinator.update_node("n2", update, now);

    let document = coordinator.document();
    let targets = &document.connections["t1"]["main"];
    assert_eq!(targets[0].to, "fetch");
    assert_eq!(document.node_by_key("fetch").unwrap().id, "n2");
}

#[test]
fn test_delete_node_cascades_edges() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    coordinator.delete_node("n2", now);

    assert_eq!(coordinator.graph().nodes.len(), 1);
    assert!(coordinator.graph().edges.is_empty());

    let document = coordinator.document();
    assert_eq!(document.nodes.len(), 1);
    let dangling: Vec<_> = document
        .iter_targets()
        .filter(|(from, _, t)| *from == "h1" || t.to == "h1")
        .collect();
    assert!(dangling.is_empty(), "no connection may reference the deleted node");
}

#[test]
fn test_debouncer_coalesces_to_latest() {
    let mut debouncer: Debouncer<String> = Debouncer::new(Duration::from_millis(200));
    let start = Instant::now();

    debouncer.push("first".to_string(), start);
    debouncer.push("second".to_string(), start + Duration::from_millis(100));

    assert_eq!(debouncer.poll(start + Duration::from_millis(250)), None);
    assert_eq!(
        debouncer.poll(start + Duration::from_millis(300)),
        Some("second".to_string())
    );
    assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
}

#[test]
fn test_text_pane_feeds_settled_edit() {
    let mut coordinator = coordinator();
    let mut pane = TextPane::with_quiet_period(Duration::from_millis(200));
    let start = Instant::now();

    // Keystroke storm: only the final content may reach the coordinator.
    pane.edit("{".to_string(), start);
    pane.edit("{\"nodes\"".to_string(), start + Duration::from_millis(50));
    pane.edit(
        r#"{"nodes": [], "connections": {}, "name": "Typed"}"#.to_string(),
        start + Duration::from_millis(100),
    );

    assert!(pane.poll(start + Duration::from_millis(150)).is_none());
    let settled = pane.poll(start + Duration::from_millis(301)).unwrap();
    coordinator.apply_raw_edit(&settled, start + Duration::from_millis(301));

    assert!(coordinator.document().nodes.is_empty());
    assert_eq!(coordinator.title(), "Typed");
    assert!(!pane.has_pending());
}

#[test]
fn test_dispatch_event_union_directly() {
    let mut coordinator = coordinator();
    let now = Instant::now();

    coordinator.dispatch(
        EditEvent::TitleEdited {
            title: "From event".to_string(),
        },
        now,
    );
    assert_eq!(coordinator.title(), "From event");

    coordinator.dispatch(
        EditEvent::NodeDeleted {
            node_id: "n1".to_string(),
        },
        now,
    );
    assert_eq!(coordinator.document().nodes.len(), 1);
}
