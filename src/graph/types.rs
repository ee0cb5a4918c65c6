//! Identifier and name types for the property graph

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! arena_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }

            /// Slot in the owning store's arena
            pub(crate) fn index(&self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

macro_rules! name_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_owned())
            }
        }
    };
}

arena_id! {
    /// Arena index of a node inside a [`GraphStore`](super::GraphStore)
    ///
    /// Stable for the lifetime of the store, so per-conversion state is keyed
    /// by it rather than by node references.
    NodeId
}

arena_id! {
    /// Arena index of an edge inside a [`GraphStore`](super::GraphStore)
    EdgeId
}

name_type! {
    /// Node label, e.g. `https://lschema.org/DocumentNode`
    Label
}

name_type! {
    /// Edge label, e.g. `https://lschema.org/has`
    EdgeType
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        let node = NodeId::new(42);
        assert_eq!(node.as_u64(), 42);
        assert_eq!(node.index(), 42);
        assert_eq!(node.to_string(), "NodeId(42)");

        let edge: EdgeId = 99.into();
        assert_eq!(edge.to_string(), "EdgeId(99)");
        assert!(NodeId::new(1) < NodeId::new(2));
    }

    #[test]
    fn test_names_serialize_as_plain_strings() {
        let label = Label::new("https://lschema.org/DocumentNode");
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"https://lschema.org/DocumentNode\"");
        assert_eq!(serde_json::from_str::<Label>(&json).unwrap(), label);

        let edge_type: EdgeType = "https://lschema.org/has".into();
        assert_eq!(edge_type.as_str(), "https://lschema.org/has");
        assert_eq!(edge_type.to_string(), "https://lschema.org/has");
    }
}
