//! Graph document decoding
//!
//! Reads a property graph serialized as JSON:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "n": 0, "labels": ["Object"], "properties": { "rdfIRI": "blank" },
//!       "edges": [ { "to": 1, "label": "has" } ] },
//!     { "n": 1, "properties": { "rdfPredicate": "http://ex/name" } }
//!   ],
//!   "edges": [ { "from": 0, "to": 1, "label": "has" } ]
//! }
//! ```
//!
//! Node keys (`n`) are local to the document. Edges may be nested under
//! their source node or listed at the top level; nested edges come first.

use super::property::{PropertyMap, PropertyValue};
use super::store::{GraphError, GraphStore};
use super::types::{Label, NodeId};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;
use tracing::debug;

/// Graph document errors
#[derive(Error, Debug)]
pub enum GraphDocumentError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or unexpected document shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two nodes share the same key
    #[error("Duplicate node key: {0}")]
    DuplicateNode(u64),

    /// An edge points at a key no node declares
    #[error("Unknown node key: {0}")]
    UnknownNode(u64),

    /// Graph store rejected the document
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type GraphDocumentResult<T> = Result<T, GraphDocumentError>;

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    nodes: Vec<NodeDocument>,
    #[serde(default)]
    edges: Vec<EdgeDocument>,
}

#[derive(Debug, Deserialize)]
struct NodeDocument {
    n: u64,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    edges: Vec<NestedEdgeDocument>,
}

#[derive(Debug, Deserialize)]
struct NestedEdgeDocument {
    to: u64,
    #[serde(default)]
    label: String,
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct EdgeDocument {
    from: u64,
    to: u64,
    #[serde(default)]
    label: String,
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
}

fn to_property_map(properties: serde_json::Map<String, serde_json::Value>) -> PropertyMap {
    properties
        .into_iter()
        .map(|(k, v)| (k, PropertyValue::from(v)))
        .collect()
}

/// Decode a graph document from a string
pub fn from_str(input: &str) -> GraphDocumentResult<GraphStore> {
    build(serde_json::from_str(input)?)
}

/// Decode a graph document from a reader
pub fn from_reader<R: Read>(reader: R) -> GraphDocumentResult<GraphStore> {
    build(serde_json::from_reader(reader)?)
}

fn build(doc: GraphDocument) -> GraphDocumentResult<GraphStore> {
    let mut store = GraphStore::new();
    let mut keys: FxHashMap<u64, NodeId> = FxHashMap::default();
    let mut pending = Vec::new();

    for node in doc.nodes {
        if keys.contains_key(&node.n) {
            return Err(GraphDocumentError::DuplicateNode(node.n));
        }
        let labels = node.labels.into_iter().map(Label::from).collect();
        let id = store.create_node_with_properties(labels, to_property_map(node.properties));
        keys.insert(node.n, id);

        for edge in node.edges {
            pending.push(EdgeDocument {
                from: node.n,
                to: edge.to,
                label: edge.label,
                properties: edge.properties,
            });
        }
    }
    pending.extend(doc.edges);

    for edge in pending {
        let source = *keys
            .get(&edge.from)
            .ok_or(GraphDocumentError::UnknownNode(edge.from))?;
        let target = *keys
            .get(&edge.to)
            .ok_or(GraphDocumentError::UnknownNode(edge.to))?;
        store.create_edge_with_properties(source, target, edge.label, to_property_map(edge.properties))?;
    }

    debug!(
        "Decoded graph document: {} nodes, {} edges",
        store.node_count(),
        store.edge_count()
    );
    Ok(store)
}
