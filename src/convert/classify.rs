//! Top-level node classification
//!
//! Every node carrying `rdfIRI` becomes an RDF subject:
//!
//! - `ref:<token>`: the value of the matching descendant, blank if none matches
//! - `.`: the node's own value
//! - `""` / `blank`: a fresh blank node
//! - anything else: that string, verbatim
//!
//! For `.` and `ref:`, a missing, null or empty value gives a blank node and a
//! non-string value is a [`ConvertError::TypeMismatch`]. A non-empty `rdfType`
//! adds an `rdf:type` quad whichever rule fired.

use super::annotations::{AnnotationReader, IriSource};
use super::context::ConversionContext;
use super::error::{ConvertError, ConvertResult};
use super::reference::resolve_reference;
use crate::graph::{GraphStore, Node, NodeId, PropertyValue};
use crate::rdf::{NamedNode, RdfPredicate, RdfSubject, RDF_TYPE};
use tracing::{debug, warn};

/// Classify every annotated node, returning them in graph order
pub(crate) fn build_top_level_nodes(
    graph: &GraphStore,
    reader: AnnotationReader<'_>,
    ctx: &mut ConversionContext,
) -> ConvertResult<Vec<NodeId>> {
    let mut top_level = Vec::new();
    for node in graph.all_nodes() {
        if classify_node(graph, reader, ctx, node)?.is_some() {
            top_level.push(node.id);
        }
    }
    debug!("Classified {} top-level nodes", top_level.len());
    Ok(top_level)
}

/// Assign a term to a node carrying `rdfIRI`
///
/// Returns `None` for nodes without the annotation. A node that already has
/// a term keeps it and emits nothing new.
pub(crate) fn classify_node(
    graph: &GraphStore,
    reader: AnnotationReader<'_>,
    ctx: &mut ConversionContext,
    node: &Node,
) -> ConvertResult<Option<RdfSubject>> {
    let Some(annotation) = reader.iri(node) else {
        return Ok(None);
    };
    if let Some(existing) = ctx.term(node.id) {
        return Ok(Some(existing.clone()));
    }

    let iri = match IriSource::parse(&annotation) {
        IriSource::Blank => None,
        IriSource::OwnValue => iri_from_value(node.id, reader.value(node))?,
        IriSource::Reference(token) => match resolve_reference(graph, reader, node.id, token) {
            Some(target) => {
                let value = graph.get_node(target).and_then(|n| reader.value(n));
                iri_from_value(target, value)?
            }
            None => {
                warn!(
                    "Reference {:?} on node {} matched nothing, using a blank node",
                    token, node.id
                );
                None
            }
        },
        IriSource::Verbatim(iri) => Some(iri.to_string()),
    };

    let term: RdfSubject = match iri {
        Some(iri) => reader.named_node(&iri)?.into(),
        None => ctx.fresh_blank_node().into(),
    };
    debug!("Node {} is {}", node.id, term);

    let term = ctx.assign(node.id, term);
    ctx.mark_processed(node.id);

    let rdf_type = reader.rdf_type(node);
    if !rdf_type.is_empty() {
        let class = reader.named_node(&rdf_type)?;
        ctx.emit(
            term.clone(),
            RdfPredicate::from(NamedNode::new_unchecked(RDF_TYPE)),
            class.into(),
        );
    }

    Ok(Some(term))
}

/// IRI text from a node value; `None` means "use a blank node"
fn iri_from_value(node: NodeId, value: Option<&PropertyValue>) -> ConvertResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(PropertyValue::String(s)) if s.is_empty() => Ok(None),
        Some(PropertyValue::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConvertError::TypeMismatch {
            node,
            found: other.type_name(),
        }),
    }
}
