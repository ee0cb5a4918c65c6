//! Conversion errors

use crate::graph::NodeId;
use crate::rdf::RdfError;
use thiserror::Error;

/// Fatal conversion errors
///
/// Any of these aborts the whole run; no quads are returned alongside them.
/// An unmatched `ref:` token is not an error and yields a blank node.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A value used as an IRI source is present but not a string
    #[error("Type mismatch: IRI source value on node {node} is {found}, expected String")]
    TypeMismatch { node: NodeId, found: &'static str },

    /// A quad needs the term of a node that has none assigned
    #[error("Unresolved source reference: node {0} has no assigned RDF term")]
    UnresolvedSourceReference(NodeId),

    /// An IRI or language tag was rejected in strict mode
    #[error("Invalid RDF term: {0}")]
    InvalidTerm(#[from] RdfError),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
