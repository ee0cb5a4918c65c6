//! Per-run conversion state

use super::error::{ConvertError, ConvertResult};
use crate::graph::NodeId;
use crate::rdf::{BlankNode, Quad, RdfObject, RdfPredicate, RdfSubject};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// State owned by exactly one conversion run
///
/// - `node_map`: graph node -> assigned RDF term; entries are never replaced
/// - `processed`: nodes already handled; never revisited
/// - `blank_counter`: seeds `_:b0`, `_:b1`, ... in allocation order
/// - `quads`: append-only output, in emission order
///
/// Quads can only be emitted from a node that already has a term, so every
/// subject and non-literal object in the output comes from `node_map`.
#[derive(Debug, Default)]
pub struct ConversionContext {
    node_map: FxHashMap<NodeId, RdfSubject>,
    processed: FxHashSet<NodeId>,
    blank_counter: u64,
    quads: Vec<Quad>,
}

impl ConversionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Term assigned to a graph node, if any
    pub fn term(&self, node: NodeId) -> Option<&RdfSubject> {
        self.node_map.get(&node)
    }

    /// Record the term of a node
    ///
    /// Returns the term that ends up assigned, which is the existing one if
    /// the node was already mapped.
    pub(crate) fn assign(&mut self, node: NodeId, term: RdfSubject) -> RdfSubject {
        self.node_map.entry(node).or_insert(term).clone()
    }

    pub fn is_processed(&self, node: NodeId) -> bool {
        self.processed.contains(&node)
    }

    /// Returns `true` if the node was not processed before
    pub(crate) fn mark_processed(&mut self, node: NodeId) -> bool {
        self.processed.insert(node)
    }

    /// Allocate the next sequential blank node
    pub(crate) fn fresh_blank_node(&mut self) -> BlankNode {
        let bnode = BlankNode::numbered(self.blank_counter);
        self.blank_counter += 1;
        bnode
    }

    /// Emit a quad whose subject is the term of `source`
    pub(crate) fn emit_from(
        &mut self,
        source: NodeId,
        predicate: &RdfPredicate,
        object: RdfObject,
    ) -> ConvertResult<()> {
        let subject = self
            .term(source)
            .cloned()
            .ok_or(ConvertError::UnresolvedSourceReference(source))?;
        self.emit(subject, predicate.clone(), object);
        Ok(())
    }

    /// Emit a quad linking the terms of two nodes
    pub(crate) fn link(
        &mut self,
        source: NodeId,
        predicate: &RdfPredicate,
        target: NodeId,
    ) -> ConvertResult<()> {
        let object = self
            .term(target)
            .cloned()
            .ok_or(ConvertError::UnresolvedSourceReference(target))?;
        self.emit_from(source, predicate, object.into())
    }

    pub(crate) fn emit(&mut self, subject: RdfSubject, predicate: RdfPredicate, object: RdfObject) {
        let quad = Quad::in_default_graph(subject, predicate, object);
        trace!("Emit {}", quad);
        self.quads.push(quad);
    }

    /// Emitted quads, in emission order
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn into_quads(self) -> Vec<Quad> {
        self.quads
    }

    /// Number of nodes with an assigned term
    pub fn term_count(&self) -> usize {
        self.node_map.len()
    }

    /// Number of processed nodes
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Number of blank nodes allocated so far
    pub fn blank_node_count(&self) -> u64 {
        self.blank_counter
    }

    /// All assigned terms
    pub fn terms(&self) -> impl Iterator<Item = (NodeId, &RdfSubject)> + '_ {
        self.node_map.iter().map(|(id, term)| (*id, term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Literal, NamedNode};

    fn predicate() -> RdfPredicate {
        RdfPredicate::new("http://ex/p").unwrap()
    }

    #[test]
    fn test_blank_nodes_are_sequential() {
        let mut ctx = ConversionContext::new();
        assert_eq!(ctx.fresh_blank_node().to_string(), "_:b0");
        assert_eq!(ctx.fresh_blank_node().to_string(), "_:b1");
        assert_eq!(ctx.blank_node_count(), 2);

        // Independent runs start over
        let mut other = ConversionContext::new();
        assert_eq!(other.fresh_blank_node().to_string(), "_:b0");
    }

    #[test]
    fn test_assignment_is_permanent() {
        let mut ctx = ConversionContext::new();
        let node = NodeId::new(1);
        let first: RdfSubject = NamedNode::new("http://ex/1").unwrap().into();
        let second: RdfSubject = NamedNode::new("http://ex/2").unwrap().into();

        assert_eq!(ctx.assign(node, first.clone()), first);
        assert_eq!(ctx.assign(node, second), first);
        assert_eq!(ctx.term(node), Some(&first));
        assert_eq!(ctx.term_count(), 1);
    }

    #[test]
    fn test_mark_processed_once() {
        let mut ctx = ConversionContext::new();
        assert!(ctx.mark_processed(NodeId::new(3)));
        assert!(!ctx.mark_processed(NodeId::new(3)));
        assert!(ctx.is_processed(NodeId::new(3)));
        assert_eq!(ctx.processed_count(), 1);
    }

    #[test]
    fn test_emit_requires_assigned_subject() {
        let mut ctx = ConversionContext::new();
        let lit: RdfObject = Literal::new_simple_literal("x").into();

        let err = ctx.emit_from(NodeId::new(9), &predicate(), lit.clone()).unwrap_err();
        assert_eq!(err, ConvertError::UnresolvedSourceReference(NodeId::new(9)));
        assert!(ctx.quads().is_empty());

        let bnode = ctx.fresh_blank_node();
        ctx.assign(NodeId::new(9), bnode.into());
        ctx.emit_from(NodeId::new(9), &predicate(), lit).unwrap();
        assert_eq!(ctx.quads().len(), 1);
        assert!(ctx.quads()[0].graph.is_none());
    }

    #[test]
    fn test_link_requires_assigned_object() {
        let mut ctx = ConversionContext::new();
        ctx.assign(NodeId::new(1), NamedNode::new("http://ex/1").unwrap().into());

        let err = ctx.link(NodeId::new(1), &predicate(), NodeId::new(2)).unwrap_err();
        assert_eq!(err, ConvertError::UnresolvedSourceReference(NodeId::new(2)));

        ctx.assign(NodeId::new(2), NamedNode::new("http://ex/2").unwrap().into());
        ctx.link(NodeId::new(1), &predicate(), NodeId::new(2)).unwrap();
        assert_eq!(
            ctx.into_quads()[0].to_string(),
            "<http://ex/1> <http://ex/p> <http://ex/2> ."
        );
    }
}
