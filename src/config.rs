//! Conversion configuration
//!
//! Names of the annotation and structural properties the projection reads.
//! Defaults match layered-schema document graphs; a YAML file can override
//! any subset of them:
//!
//! ```yaml
//! iri_property: rdfIRI
//! value_property: https://lschema.org/value
//! strict_iris: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Property names and term handling for one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Marks a top-level node and says how to name it
    pub iri_property: String,
    /// Class IRI of a top-level node, or datatype IRI of a literal
    pub type_property: String,
    /// Predicate linking the owning subject to this node
    pub predicate_property: String,
    /// Language tag properties, first non-empty wins
    pub lang_properties: Vec<String>,
    /// Where a leaf node keeps its scalar value
    pub value_property: String,
    /// Schema identifier matched by `ref:` tokens
    pub schema_node_id_property: String,
    /// Present on the root node of an entity; reference lookups stop there
    pub entity_root_property: String,
    /// Validate IRIs and language tags instead of taking them verbatim
    pub strict_iris: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            iri_property: "rdfIRI".to_string(),
            type_property: "rdfType".to_string(),
            predicate_property: "rdfPredicate".to_string(),
            lang_properties: vec!["rdfLang".to_string(), "rdfLanguage".to_string()],
            value_property: "https://lschema.org/value".to_string(),
            schema_node_id_property: "https://lschema.org/schemaNodeId".to_string(),
            entity_root_property: "https://lschema.org/entitySchema".to_string(),
            strict_iris: false,
        }
    }
}

impl ConversionConfig {
    /// Parse a configuration from YAML; missing fields keep their defaults
    pub fn from_yaml_str(input: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Load a configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Builder-style switch for IRI validation
    pub fn with_strict_iris(mut self, strict: bool) -> Self {
        self.strict_iris = strict;
        self
    }
}
