//! RDF terms and output
//!
//! - RDF terms and quads over oxrdf (`types`)
//! - N-Quads serialization (`serialization`)
//!
//! # Example
//!
//! ```rust
//! use graph2rdf::rdf::{Literal, NamedNode, NQuadsSerializer, Quad, RdfPredicate};
//!
//! let subject = NamedNode::new("http://example.org/alice").unwrap();
//! let predicate = RdfPredicate::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let object = Literal::new_simple_literal("Alice");
//!
//! let quad = Quad::in_default_graph(subject.into(), predicate, object.into());
//! let text = NQuadsSerializer::serialize(&[quad]).unwrap();
//! assert!(text.starts_with("<http://example.org/alice>"));
//! ```

mod serialization;
mod types;

pub use types::{
    BlankNode, Literal, NamedNode, Quad, RdfError, RdfObject, RdfPredicate, RdfResult, RdfSubject,
};

pub use serialization::{NQuadsSerializer, SerializeError, SerializeResult};

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `xsd:string`, the datatype of simple literals
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
