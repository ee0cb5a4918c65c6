//! Graph nodes

use super::property::{PropertyMap, PropertyValue};
use super::types::{Label, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// A labeled node with properties
///
/// The schema annotations the RDF projection reads (`rdfIRI`, `rdfType`,
/// `rdfPredicate`, ...) and the node value are ordinary properties.
/// Identity is the id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub labels: HashSet<Label>,
    pub properties: PropertyMap,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<Label>) -> Self {
        Self::new_with_properties(id, vec![label.into()], PropertyMap::new())
    }

    pub fn new_with_properties(id: NodeId, labels: Vec<Label>, properties: PropertyMap) -> Self {
        Self {
            id,
            labels: labels.into_iter().collect(),
            properties,
        }
    }

    pub fn add_label(&mut self, label: impl Into<Label>) {
        self.labels.insert(label.into());
    }

    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Set a property, returning the value it replaced
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Presence test; a `Null` value still counts as present
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotations_are_properties() {
        let mut node = Node::new(NodeId::new(2), "https://lschema.org/DocumentNode");
        assert!(node.has_label(&Label::new("https://lschema.org/DocumentNode")));

        assert!(node.set_property("rdfIRI", ".").is_none());
        node.set_property("rdfType", PropertyValue::Null);
        assert!(node.has_property("rdfType"));
        assert_eq!(node.get_property("rdfIRI").unwrap().as_string(), Some("."));

        let old = node.set_property("rdfIRI", "blank");
        assert_eq!(old, Some(PropertyValue::from(".")));
    }

    #[test]
    fn test_labels_are_a_set() {
        let mut props = PropertyMap::new();
        props.insert("https://lschema.org/value".to_string(), "Ann".into());

        let mut node = Node::new_with_properties(NodeId::new(5), vec![Label::new("Value")], props);
        node.add_label("Attribute");
        node.add_label("Value");
        assert_eq!(node.label_count(), 2);
    }

    #[test]
    fn test_identity_is_the_id() {
        assert_eq!(Node::new(NodeId::new(7), "A"), Node::new(NodeId::new(7), "B"));
        assert_ne!(Node::new(NodeId::new(7), "A"), Node::new(NodeId::new(8), "A"));
    }
}
