//! Property values for graph nodes and edges

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Property map for storing node and edge properties
pub type PropertyMap = HashMap<String, PropertyValue>;

/// A property value
///
/// Scalars (`String`, `Integer`, `Float`, `Number`, `Boolean`) can become
/// RDF literals. `Array` and `Map` never do; `Null` reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    /// Non-`i64` number from a graph document, kept in its JSON form
    Number(serde_json::Number),
    Boolean(bool),
    Array(Vec<PropertyValue>),
    Map(PropertyMap),
    Null,
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Text of a scalar value
    ///
    /// Strings are returned verbatim. Numbers use JSON number formatting,
    /// so `1.0` stays `1.0` and `u64` values keep every digit. Null and
    /// structured values have no lexical form.
    pub fn lexical_form(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(x) => Some(match serde_json::Number::from_f64(*x) {
                Some(n) => n.to_string(),
                None => x.to_string(),
            }),
            Self::Number(n) => Some(n.to_string()),
            Self::Boolean(b) => Some(b.to_string()),
            Self::Array(_) | Self::Map(_) | Self::Null => None,
        }
    }

    /// Variant name, used in type mismatch errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Number(_) => "Number",
            Self::Boolean(_) => "Boolean",
            Self::Array(_) => "Array",
            Self::Map(_) => "Map",
            Self::Null => "Null",
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<PropertyValue>) -> Self {
        Self::Array(items)
    }
}

impl From<PropertyMap> for PropertyValue {
    fn from(map: PropertyMap) -> Self {
        Self::Map(map)
    }
}

/// JSON values as found in graph documents
///
/// Integral numbers that fit `i64` become `Integer`; every other number is
/// kept as `Number` so its lexical form survives.
impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Number(n),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}
