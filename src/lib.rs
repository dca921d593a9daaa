//! # Flowdoc - Workflow Document Conversion and Synchronization Engine
//!
//! **Flowdoc** keeps the three views of a visual workflow editor (the
//! node-and-edge graph, the raw-text document, and the title field) in
//! lockstep over a single canonical JSON document, without feedback loops or
//! silent data loss. Node identity, port semantics, and connection topology
//! survive repeated round-trips exactly.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: the host supplies an initial [`WorkflowDocument`](document::WorkflowDocument)
//!     (possibly empty) and a read-only integration [`Catalog`](catalog::Catalog).
//! 2.  **Coordinate**: a [`Coordinator`](sync::Coordinator) owns the document and
//!     its derived [`VisualGraph`](graph::VisualGraph); every view edit routes
//!     through it.
//! 3.  **Convert**: the pure [`to_graph`](convert::to_graph) /
//!     [`to_document`](convert::to_document) pair maps between the two
//!     representations, with the port resolver deriving each node's ports and
//!     label from the catalog.
//! 4.  **Export**: on explicit user request the canonical document is
//!     serialized for download; nothing is pushed to a network endpoint.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowdoc::prelude::*;
//! use std::time::Instant;
//!
//! fn main() -> Result<()> {
//!     // Host-supplied inputs.
//!     let catalog = Catalog::from_file("path/to/catalog.json")?;
//!     let document = WorkflowDocument::from_file("path/to/workflow.json")?;
//!
//!     let mut coordinator = Coordinator::new(document, catalog);
//!
//!     // A browse-panel pick adds a node and re-derives the graph.
//!     coordinator.add_node("send_email", "email", Instant::now());
//!
//!     // The raw-text view coalesces keystrokes through a pane, then feeds
//!     // the settled text back in.
//!     let mut pane = TextPane::new();
//!     pane.edit(r#"{"nodes": [], "connections": {}}"#.to_string(), Instant::now());
//!     if let Some(text) = pane.poll(Instant::now()) {
//!         coordinator.apply_raw_edit(&text, Instant::now());
//!     }
//!
//!     // The canonical document, ready for download.
//!     let exported = coordinator.export_document()?;
//!     println!("{}", exported);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod convert;
pub mod document;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod sync;
