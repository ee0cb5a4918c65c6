//! Labeled property graph
//!
//! This module implements the property graph data model the RDF projection
//! reads from:
//! - Nodes with multiple labels and properties
//! - Directed edges with labels and properties
//! - Multiple edges between the same nodes
//! - In-memory arena storage with adjacency lists
//! - JSON graph documents ([`json`])

pub mod edge;
pub mod json;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use json::{GraphDocumentError, GraphDocumentResult};
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, EdgeType, Label, NodeId};
