//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the flowdoc crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.

// Coordination
pub use crate::sync::{
    Coordinator, Debouncer, EditEvent, EditSource, NodeUpdate, ResetTimer, TextPane, UpdateLock,
};

// Conversion
pub use crate::convert::{resolve_ports, to_document, to_graph, ResolvedPorts};

// Data structures
pub use crate::catalog::{ActionSpec, Catalog, Integration};
pub use crate::document::{ConnectionTarget, NodeRecord, WorkflowDocument};
pub use crate::graph::{NodeData, Position, VisualEdge, VisualGraph, VisualNode};

// Error types
pub use crate::error::{CatalogError, DocumentError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
