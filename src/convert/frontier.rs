//! Frontier extension
//!
//! One round takes the current frontier, walks one or two edges out of each
//! node and emits predicate quads. Children that still need their own pass
//! form the next frontier.

use super::annotations::AnnotationReader;
use super::classify::classify_node;
use super::context::ConversionContext;
use super::error::ConvertResult;
use crate::graph::{GraphStore, NodeId};
use indexmap::IndexSet;
use tracing::debug;

/// Extend every frontier node, returning the union of their next frontiers
pub(crate) fn extend_all(
    graph: &GraphStore,
    reader: AnnotationReader<'_>,
    ctx: &mut ConversionContext,
    frontier: &[NodeId],
) -> ConvertResult<Vec<NodeId>> {
    let mut next = IndexSet::new();
    for &node in frontier {
        next.extend(extend(graph, reader, ctx, node)?);
    }
    // A node extended later in this round may have been queued earlier
    next.retain(|id| !ctx.is_processed(*id));
    Ok(next.into_iter().collect())
}

/// Emit the predicate quads hanging off one frontier node
///
/// For each outgoing edge `node -> m` where `m` has `rdfPredicate`:
///
/// - `m` holds a literal: emit it
/// - `m` already has a term: link to it
/// - otherwise `m` is an intermediate node: link or emit each child of `m`,
///   queueing the children that are neither
///
/// Targets without `rdfPredicate` are not part of the projection.
pub(crate) fn extend(
    graph: &GraphStore,
    reader: AnnotationReader<'_>,
    ctx: &mut ConversionContext,
    node: NodeId,
) -> ConvertResult<IndexSet<NodeId>> {
    let mut next = IndexSet::new();
    ctx.mark_processed(node);

    if ctx.term(node).is_none() {
        if let Some(n) = graph.get_node(node) {
            classify_node(graph, reader, ctx, n)?;
        }
    }

    for target in graph.children(node) {
        let Some(m) = graph.get_node(target) else {
            continue;
        };
        let predicate = reader.predicate(m);
        if predicate.is_empty() {
            continue;
        }
        let predicate = reader.predicate_term(&predicate)?;

        if let Some(literal) = reader.literal(m)? {
            ctx.emit_from(node, &predicate, literal.into())?;
            ctx.mark_processed(target);
            continue;
        }

        ctx.mark_processed(target);
        if ctx.term(target).is_some() {
            ctx.link(node, &predicate, target)?;
            continue;
        }

        for child in graph.children(target) {
            if ctx.term(child).is_some() {
                ctx.link(node, &predicate, child)?;
                ctx.mark_processed(child);
                continue;
            }
            let literal = match graph.get_node(child) {
                Some(c) => reader.literal(c)?,
                None => None,
            };
            match literal {
                Some(literal) => {
                    ctx.emit_from(node, &predicate, literal.into())?;
                    ctx.mark_processed(child);
                }
                None if !ctx.is_processed(child) => {
                    next.insert(child);
                }
                None => {}
            }
        }
    }

    if !next.is_empty() {
        debug!("Node {} queued {} nodes", node, next.len());
    }
    Ok(next)
}
