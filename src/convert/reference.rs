//! `ref:<token>` resolution
//!
//! Finds, within the entity owned by a node, the node whose schema identifier
//! equals the token. The search is depth-first in edge order, visits the
//! owning node first and never enters a nested entity. Nothing is cached;
//! every reference is a fresh search.

use super::annotations::AnnotationReader;
use crate::graph::{GraphStore, NodeId};

pub(crate) fn resolve_reference(
    graph: &GraphStore,
    reader: AnnotationReader<'_>,
    owner: NodeId,
    token: &str,
) -> Option<NodeId> {
    graph.find_descendant(
        owner,
        |node| !reader.is_entity_root(node),
        |node| reader.schema_node_id(node) == token,
    )
}
