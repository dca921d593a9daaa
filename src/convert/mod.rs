pub mod identity;
pub mod ports;
pub mod to_document;
pub mod to_graph;

pub use ports::*;
pub use to_document::to_document;
pub use to_graph::to_graph;
