//! In-memory graph storage implementation
//!
//! Nodes and edges live in append-only arenas indexed by their ids, so
//! iteration order is creation order and ids stay stable for the lifetime of
//! the store. Adjacency lists keep edges per node in creation order.

use super::edge::Edge;
use super::node::Node;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, EdgeType, Label, NodeId};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Graph store errors
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Edge source {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Edge target {0} does not exist")]
    InvalidEdgeTarget(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Arena-backed property graph
///
/// `outgoing[n]` / `incoming[n]` hold edge ids per node.
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_node(&mut self, label: impl Into<Label>) -> NodeId {
        self.create_node_with_properties(vec![label.into()], PropertyMap::new())
    }

    pub fn create_node_with_properties(&mut self, labels: Vec<Label>, properties: PropertyMap) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u64);
        self.nodes.push(Node::new_with_properties(id, labels, properties));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Set a property on an existing node, returning the previous value
    pub fn set_node_property(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> GraphResult<Option<PropertyValue>> {
        match self.nodes.get_mut(id.index()) {
            Some(node) => Ok(node.set_property(key, value)),
            None => Err(GraphError::NodeNotFound(id)),
        }
    }

    pub fn create_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge_type: impl Into<EdgeType>,
    ) -> GraphResult<EdgeId> {
        self.create_edge_with_properties(source, target, edge_type, PropertyMap::new())
    }

    /// Add a directed edge; both endpoints must already exist
    pub fn create_edge_with_properties(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge_type: impl Into<EdgeType>,
        properties: PropertyMap,
    ) -> GraphResult<EdgeId> {
        if !self.has_node(source) {
            return Err(GraphError::InvalidEdgeSource(source));
        }
        if !self.has_node(target) {
            return Err(GraphError::InvalidEdgeTarget(target));
        }

        let id = EdgeId::new(self.edges.len() as u64);
        self.edges
            .push(Edge::new_with_properties(id, source, target, edge_type, properties));
        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);
        Ok(id)
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    fn edges_in<'a>(&'a self, lists: &'a [Vec<EdgeId>], node: NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        lists
            .get(node.index())
            .into_iter()
            .flatten()
            .filter_map(move |&id| self.get_edge(id))
    }

    /// Edges leaving a node, in creation order
    pub fn get_outgoing_edges(&self, node: NodeId) -> Vec<&Edge> {
        self.edges_in(&self.outgoing, node).collect()
    }

    /// Edges entering a node, in creation order
    pub fn get_incoming_edges(&self, node: NodeId) -> Vec<&Edge> {
        self.edges_in(&self.incoming, node).collect()
    }

    /// Targets of a node's outgoing edges, in edge order
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges_in(&self.outgoing, node).map(|edge| edge.target)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes, in creation order
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Depth-first, pre-order search below `root`
    ///
    /// `root` is tested first. An outgoing edge is only followed when
    /// `follow` accepts its target; each node is visited at most once, so
    /// cycles terminate. Returns the first node accepted by `matches`.
    pub fn find_descendant<F, M>(&self, root: NodeId, mut follow: F, mut matches: M) -> Option<NodeId>
    where
        F: FnMut(&Node) -> bool,
        M: FnMut(&Node) -> bool,
    {
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = self.get_node(id) else {
                continue;
            };
            if matches(node) {
                return Some(id);
            }

            // Reverse so the first edge is popped first
            let children: Vec<NodeId> = self
                .children(id)
                .filter(|child| !visited.contains(child))
                .filter(|&child| self.get_node(child).map(|n| follow(n)).unwrap_or(false))
                .collect();
            stack.extend(children.into_iter().rev());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get_node() {
        let mut store = GraphStore::new();
        let node_id = store.create_node("Object");

        assert_eq!(store.node_count(), 1);
        let node = store.get_node(node_id).unwrap();
        assert_eq!(node.id, node_id);
        assert!(node.has_label(&Label::new("Object")));
    }

    #[test]
    fn test_create_node_with_properties() {
        let mut store = GraphStore::new();
        let mut props = PropertyMap::new();
        props.insert("rdfIRI".to_string(), "blank".into());

        let node_id = store.create_node_with_properties(
            vec![Label::new("DocumentNode"), Label::new("Object")],
            props,
        );

        let node = store.get_node(node_id).unwrap();
        assert_eq!(node.label_count(), 2);
        assert_eq!(node.get_property("rdfIRI").unwrap().as_string(), Some("blank"));
    }

    #[test]
    fn test_set_node_property() {
        let mut store = GraphStore::new();
        let node_id = store.create_node("Value");

        assert_eq!(store.set_node_property(node_id, "v", "a"), Ok(None));
        assert_eq!(
            store.set_node_property(node_id, "v", "b"),
            Ok(Some(PropertyValue::from("a")))
        );

        let missing = NodeId::new(42);
        assert_eq!(
            store.set_node_property(missing, "v", "c"),
            Err(GraphError::NodeNotFound(missing))
        );
    }

    #[test]
    fn test_create_and_get_edge() {
        let mut store = GraphStore::new();
        let node1 = store.create_node("Object");
        let node2 = store.create_node("Value");

        let edge_id = store.create_edge(node1, node2, "has").unwrap();

        assert_eq!(store.edge_count(), 1);
        let edge = store.get_edge(edge_id).unwrap();
        assert_eq!(edge.source, node1);
        assert_eq!(edge.target, node2);
        assert_eq!(edge.edge_type, EdgeType::new("has"));
    }

    #[test]
    fn test_edge_validation() {
        let mut store = GraphStore::new();
        let node1 = store.create_node("Object");
        let invalid_node = NodeId::new(999);

        let result = store.create_edge(invalid_node, node1, "has");
        assert_eq!(result, Err(GraphError::InvalidEdgeSource(invalid_node)));

        let result = store.create_edge(node1, invalid_node, "has");
        assert_eq!(result, Err(GraphError::InvalidEdgeTarget(invalid_node)));
    }

    #[test]
    fn test_adjacency_lists_keep_creation_order() {
        let mut store = GraphStore::new();
        let node1 = store.create_node("Object");
        let node2 = store.create_node("Value");
        let node3 = store.create_node("Value");

        store.create_edge(node1, node3, "has").unwrap();
        store.create_edge(node1, node2, "has").unwrap();
        store.create_edge(node2, node3, "has").unwrap();

        let targets: Vec<NodeId> = store.children(node1).collect();
        assert_eq!(targets, vec![node3, node2]);

        assert_eq!(store.get_outgoing_edges(node2).len(), 1);
        assert_eq!(store.get_incoming_edges(node2).len(), 1);
        assert_eq!(store.get_outgoing_edges(node3).len(), 0);
        assert_eq!(store.get_incoming_edges(node3).len(), 2);
    }

    #[test]
    fn test_multi_label_nodes() {
        let mut store = GraphStore::new();
        let entity = store.create_node_with_properties(
            vec![Label::new("Object"), Label::new("Entity")],
            PropertyMap::new(),
        );
        let value = store.create_node("Value");

        let node = store.get_node(entity).unwrap();
        assert_eq!(node.label_count(), 2);
        assert!(node.has_label(&Label::new("Entity")));
        assert!(!store.get_node(value).unwrap().has_label(&Label::new("Entity")));
        assert_eq!(store.all_nodes().map(|n| n.id).collect::<Vec<_>>(), vec![entity, value]);
    }

    #[test]
    fn test_find_descendant_is_depth_first_preorder() {
        let mut store = GraphStore::new();
        let root = store.create_node("Object");
        let left = store.create_node("Object");
        let left_leaf = store.create_node("Value");
        let right = store.create_node("Value");
        store.set_node_property(left_leaf, "id", "x").unwrap();
        store.set_node_property(right, "id", "x").unwrap();

        store.create_edge(root, left, "has").unwrap();
        store.create_edge(root, right, "has").unwrap();
        store.create_edge(left, left_leaf, "has").unwrap();

        let found = store.find_descendant(
            root,
            |_| true,
            |node| node.get_property("id").and_then(|v| v.as_string()) == Some("x"),
        );
        assert_eq!(found, Some(left_leaf));

        // The root itself is tested first
        let found = store.find_descendant(root, |_| true, |node| node.id == root);
        assert_eq!(found, Some(root));
    }

    #[test]
    fn test_find_descendant_respects_follow_and_cycles() {
        let mut store = GraphStore::new();
        let root = store.create_node("Object");
        let boundary = store.create_node("Entity");
        let hidden = store.create_node("Value");
        store.set_node_property(hidden, "id", "x").unwrap();

        store.create_edge(root, boundary, "has").unwrap();
        store.create_edge(boundary, hidden, "has").unwrap();
        store.create_edge(boundary, root, "has").unwrap();

        let is_x = |node: &Node| node.get_property("id").and_then(|v| v.as_string()) == Some("x");

        let blocked = store.find_descendant(
            root,
            |node| !node.has_label(&Label::new("Entity")),
            is_x,
        );
        assert_eq!(blocked, None);

        let open = store.find_descendant(root, |_| true, is_x);
        assert_eq!(open, Some(hidden));
    }
}
