//! RDF terms and quads
//!
//! Wrappers over the oxrdf primitives. Terms can be built validated or
//! verbatim: graph annotations are schema-authored, so the converter passes
//! them through unless strict mode asks otherwise. Display output is the
//! N-Quads form of each term.

use oxrdf::{BlankNode as OxBlankNode, Literal as OxLiteral, NamedNode as OxNamedNode};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rejected RDF terms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Invalid blank node: {0}")]
    InvalidBlankNode(String),

    /// Bad language tag
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}

pub type RdfResult<T> = Result<T, RdfError>;

/// IRI term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    /// Parse and validate an IRI
    pub fn new(iri: &str) -> RdfResult<Self> {
        match OxNamedNode::new(iri) {
            Ok(node) => Ok(Self(node)),
            Err(e) => Err(RdfError::InvalidIri(format!("{iri}: {e}"))),
        }
    }

    /// Take an IRI string verbatim
    pub fn new_unchecked(iri: impl Into<String>) -> Self {
        Self(OxNamedNode::new_unchecked(iri))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Blank node, stored without its `_:` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlankNode(OxBlankNode);

impl BlankNode {
    /// `_:b<index>`
    pub fn numbered(index: u64) -> Self {
        Self(OxBlankNode::new_unchecked(format!("b{index}")))
    }

    /// Identifier without the `_:` prefix
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for BlankNode {
    type Err = RdfError;

    /// Parse an identifier given without its `_:` prefix
    fn from_str(id: &str) -> RdfResult<Self> {
        match OxBlankNode::new(id) {
            Ok(node) => Ok(Self(node)),
            Err(e) => Err(RdfError::InvalidBlankNode(format!("{id}: {e}"))),
        }
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Literal term
///
/// Exactly one of: simple (`xsd:string`), language-tagged, or typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    /// Language-tagged literal; the tag must be well-formed BCP47
    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> RdfResult<Self> {
        match OxLiteral::new_language_tagged_literal(value, language) {
            Ok(literal) => Ok(Self(literal)),
            Err(e) => Err(RdfError::InvalidLiteral(e.to_string())),
        }
    }

    /// Language-tagged literal with the tag taken verbatim
    pub fn new_language_tagged_literal_unchecked(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self(OxLiteral::new_language_tagged_literal_unchecked(value, language))
    }

    pub fn new_typed_literal(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.0))
    }

    /// Lexical form
    pub fn value(&self) -> &str {
        self.0.value()
    }

    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    pub fn datatype(&self) -> NamedNode {
        NamedNode(self.0.datatype().into_owned())
    }

    pub fn inner(&self) -> &OxLiteral {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Subject position term, and the term a graph node is assigned
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfSubject {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
}

impl RdfSubject {
    pub fn is_named_node(&self) -> bool {
        matches!(self, Self::NamedNode(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }
}

impl fmt::Display for RdfSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => fmt::Display::fmt(node, f),
            Self::BlankNode(node) => fmt::Display::fmt(node, f),
        }
    }
}

impl From<NamedNode> for RdfSubject {
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<BlankNode> for RdfSubject {
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

/// Predicate IRI
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdfPredicate(NamedNode);

impl RdfPredicate {
    /// Predicate from a validated IRI
    pub fn new(iri: &str) -> RdfResult<Self> {
        NamedNode::new(iri).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RdfPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<NamedNode> for RdfPredicate {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

/// Object position term: a node term or a literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfObject {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl RdfObject {
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The object as a node term; `None` for literals
    pub fn as_subject(&self) -> Option<RdfSubject> {
        match self {
            Self::NamedNode(node) => Some(RdfSubject::NamedNode(node.clone())),
            Self::BlankNode(node) => Some(RdfSubject::BlankNode(node.clone())),
            Self::Literal(_) => None,
        }
    }
}

impl fmt::Display for RdfObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => fmt::Display::fmt(node, f),
            Self::BlankNode(node) => fmt::Display::fmt(node, f),
            Self::Literal(literal) => fmt::Display::fmt(literal, f),
        }
    }
}

impl From<NamedNode> for RdfObject {
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<BlankNode> for RdfObject {
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<Literal> for RdfObject {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<RdfSubject> for RdfObject {
    fn from(term: RdfSubject) -> Self {
        match term {
            RdfSubject::NamedNode(node) => Self::NamedNode(node),
            RdfSubject::BlankNode(node) => Self::BlankNode(node),
        }
    }
}

/// Subject, predicate, object and graph label
///
/// `graph: None` is the default graph, which is where conversion writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: RdfSubject,
    pub predicate: RdfPredicate,
    pub object: RdfObject,
    pub graph: Option<NamedNode>,
}

impl Quad {
    pub fn in_default_graph(subject: RdfSubject, predicate: RdfPredicate, object: RdfObject) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph: None,
        }
    }
}

/// One N-Quads statement, without the trailing newline
impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(graph) = &self.graph {
            write!(f, " {}", graph)?;
        }
        f.write_str(" .")
    }
}
