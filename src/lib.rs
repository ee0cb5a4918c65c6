//! graph2rdf
//!
//! Projects a labeled property graph into RDF quads, driven by schema
//! annotations carried on the graph's nodes.
//!
//! # Annotations
//!
//! - `rdfIRI`: marks a node as an RDF subject and says how to name it
//!   (`""`/`"blank"`, `"."`, `"ref:<token>"` or a verbatim IRI)
//! - `rdfType`: class of a subject, or datatype of a literal
//! - `rdfPredicate`: predicate from the owning subject to this node
//! - `rdfLang`/`rdfLanguage`: language tag of a literal
//!
//! ## Example Usage
//!
//! ```rust
//! use graph2rdf::{GraphStore, GraphToRdf, NQuadsSerializer};
//!
//! let mut store = GraphStore::new();
//!
//! let alice = store.create_node("Person");
//! store.set_node_property(alice, "rdfIRI", "http://example.org/alice").unwrap();
//! store.set_node_property(alice, "rdfType", "http://xmlns.com/foaf/0.1/Person").unwrap();
//!
//! let name = store.create_node("Name");
//! store.set_node_property(name, "rdfPredicate", "http://xmlns.com/foaf/0.1/name").unwrap();
//! store.set_node_property(name, "https://lschema.org/value", "Alice").unwrap();
//! store.create_edge(alice, name, "HAS").unwrap();
//!
//! let quads = GraphToRdf::new(&store).convert_to_quads().unwrap();
//! assert_eq!(quads.len(), 2);
//!
//! let nquads = NQuadsSerializer::serialize(&quads).unwrap();
//! assert!(nquads.contains("\"Alice\""));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod convert;
pub mod graph;
pub mod rdf;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, EdgeType, GraphError, GraphResult, GraphStore, Label, Node, NodeId,
    PropertyMap, PropertyValue,
};

pub use config::{ConfigError, ConfigResult, ConversionConfig};

pub use convert::{convert_graph, ConversionContext, ConvertError, ConvertResult, GraphToRdf};

pub use rdf::{
    BlankNode, Literal, NQuadsSerializer, NamedNode, Quad, RdfError, RdfObject, RdfPredicate,
    RdfSubject,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
