//! Property graph to RDF projection
//!
//! Converts an annotated property graph into quads in the default graph:
//! - Classification of `rdfIRI` nodes into IRIs or blank nodes
//! - `ref:` resolution inside the owning entity
//! - Frontier extension along `rdfPredicate` edges until nothing is left
//!
//! # Example
//!
//! ```rust
//! use graph2rdf::convert::GraphToRdf;
//! use graph2rdf::graph::GraphStore;
//!
//! let mut graph = GraphStore::new();
//! let person = graph.create_node("Person");
//! graph.set_node_property(person, "rdfIRI", "http://ex/1").unwrap();
//!
//! let name = graph.create_node("Name");
//! graph.set_node_property(name, "rdfPredicate", "http://ex/name").unwrap();
//! graph.set_node_property(name, "https://lschema.org/value", "Ann").unwrap();
//! graph.create_edge(person, name, "has").unwrap();
//!
//! let quads = GraphToRdf::new(&graph).convert_to_quads().unwrap();
//! assert_eq!(quads[0].to_string(), "<http://ex/1> <http://ex/name> \"Ann\" .");
//! ```

mod annotations;
mod classify;
mod context;
mod error;
mod frontier;
mod reference;

pub use context::ConversionContext;
pub use error::{ConvertError, ConvertResult};

use crate::config::ConversionConfig;
use crate::graph::{GraphStore, NodeId};
use crate::rdf::Quad;
use annotations::AnnotationReader;
use tracing::{debug, info};

/// Conversion engine over one read-only graph
#[derive(Debug, Clone)]
pub struct GraphToRdf<'g> {
    graph: &'g GraphStore,
    config: ConversionConfig,
}

impl<'g> GraphToRdf<'g> {
    /// Engine with the default annotation names
    pub fn new(graph: &'g GraphStore) -> Self {
        Self::with_config(graph, ConversionConfig::default())
    }

    pub fn with_config(graph: &'g GraphStore, config: ConversionConfig) -> Self {
        Self { graph, config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    fn reader(&self) -> AnnotationReader<'_> {
        AnnotationReader::new(&self.config)
    }

    /// Classify every `rdfIRI` node, returning the initial frontier
    pub fn build_top_level_nodes(&self, ctx: &mut ConversionContext) -> ConvertResult<Vec<NodeId>> {
        classify::build_top_level_nodes(self.graph, self.reader(), ctx)
    }

    /// Run one extension round, returning the next frontier
    pub fn extend(&self, ctx: &mut ConversionContext, frontier: &[NodeId]) -> ConvertResult<Vec<NodeId>> {
        frontier::extend_all(self.graph, self.reader(), ctx, frontier)
    }

    /// Run a full conversion in a fresh context
    ///
    /// Every call starts over: blank nodes are numbered from `_:b0` again.
    /// On error the partial context is dropped.
    pub fn convert(&self) -> ConvertResult<ConversionContext> {
        info!(
            "Converting graph with {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );

        let mut ctx = ConversionContext::new();
        let mut frontier = self.build_top_level_nodes(&mut ctx)?;
        let mut round = 0usize;
        while !frontier.is_empty() {
            round += 1;
            debug!("Round {}: frontier of {} nodes", round, frontier.len());
            frontier = self.extend(&mut ctx, &frontier)?;
        }

        info!(
            "Conversion finished after {} rounds: {} quads, {} terms, {} blank nodes",
            round,
            ctx.quads().len(),
            ctx.term_count(),
            ctx.blank_node_count()
        );
        Ok(ctx)
    }

    pub fn convert_to_quads(&self) -> ConvertResult<Vec<Quad>> {
        self.convert().map(ConversionContext::into_quads)
    }
}

/// Convert a graph with the given configuration
pub fn convert_graph(graph: &GraphStore, config: &ConversionConfig) -> ConvertResult<Vec<Quad>> {
    GraphToRdf::with_config(graph, config.clone()).convert_to_quads()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PropertyValue;

    #[test]
    fn test_empty_graph() {
        let graph = GraphStore::new();
        let ctx = GraphToRdf::new(&graph).convert().unwrap();
        assert!(ctx.quads().is_empty());
        assert_eq!(ctx.term_count(), 0);
    }

    #[test]
    fn test_runs_are_independent() {
        let mut graph = GraphStore::new();
        let node = graph.create_node("Thing");
        graph.set_node_property(node, "rdfIRI", "blank").unwrap();
        graph.set_node_property(node, "rdfType", "http://ex/T").unwrap();

        let engine = GraphToRdf::new(&graph);
        let first = engine.convert_to_quads().unwrap();
        let second = engine.convert_to_quads().unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].subject.to_string(), "_:b0");
    }

    #[test]
    fn test_custom_annotation_names() {
        let mut graph = GraphStore::new();
        let node = graph.create_node("Thing");
        graph.set_node_property(node, "iri", "http://ex/x").unwrap();
        let child = graph.create_node("Value");
        graph.set_node_property(child, "pred", "http://ex/v").unwrap();
        graph.set_node_property(child, "val", PropertyValue::Float(1.5)).unwrap();
        graph.create_edge(node, child, "has").unwrap();

        let config = ConversionConfig {
            iri_property: "iri".to_string(),
            predicate_property: "pred".to_string(),
            value_property: "val".to_string(),
            ..ConversionConfig::default()
        };
        let quads = convert_graph(&graph, &config).unwrap();
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].to_string(), "<http://ex/x> <http://ex/v> \"1.5\" .");
    }

    #[test]
    fn test_error_discards_output() {
        let mut graph = GraphStore::new();
        let node = graph.create_node("Thing");
        graph.set_node_property(node, "rdfIRI", ".").unwrap();
        graph
            .set_node_property(node, "https://lschema.org/value", PropertyValue::Array(vec![]))
            .unwrap();

        let err = GraphToRdf::new(&graph).convert().unwrap_err();
        assert!(matches!(err, ConvertError::TypeMismatch { found: "Array", .. }));
    }
}
