//! Reading schema annotations off graph nodes

use super::error::ConvertResult;
use crate::config::ConversionConfig;
use crate::graph::{Node, PropertyValue};
use crate::rdf::{Literal, NamedNode, RdfPredicate};

/// How an `rdfIRI` annotation names its node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IriSource<'a> {
    /// `""` or `"blank"`
    Blank,
    /// `"."`: the node's own value
    OwnValue,
    /// `"ref:<token>"`: the value of a descendant with that schema id
    Reference(&'a str),
    /// Anything else
    Verbatim(&'a str),
}

impl<'a> IriSource<'a> {
    pub(crate) fn parse(annotation: &'a str) -> Self {
        if let Some(token) = annotation.strip_prefix("ref:") {
            return IriSource::Reference(token);
        }
        match annotation {
            "" | "blank" => IriSource::Blank,
            "." => IriSource::OwnValue,
            iri => IriSource::Verbatim(iri),
        }
    }
}

/// Annotation lookups bound to one configuration
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnnotationReader<'c> {
    config: &'c ConversionConfig,
}

impl<'c> AnnotationReader<'c> {
    pub(crate) fn new(config: &'c ConversionConfig) -> Self {
        Self { config }
    }

    /// Annotation as text; `None` only when the property is absent
    fn annotation(&self, node: &Node, key: &str) -> Option<String> {
        node.get_property(key)
            .map(|value| value.lexical_form().unwrap_or_default())
    }

    fn text(&self, node: &Node, key: &str) -> String {
        self.annotation(node, key).unwrap_or_default()
    }

    /// `rdfIRI`, if the node carries one at all
    pub(crate) fn iri(&self, node: &Node) -> Option<String> {
        self.annotation(node, &self.config.iri_property)
    }

    pub(crate) fn rdf_type(&self, node: &Node) -> String {
        self.text(node, &self.config.type_property)
    }

    pub(crate) fn predicate(&self, node: &Node) -> String {
        self.text(node, &self.config.predicate_property)
    }

    pub(crate) fn language(&self, node: &Node) -> Option<String> {
        self.config
            .lang_properties
            .iter()
            .map(|key| self.text(node, key))
            .find(|lang| !lang.is_empty())
    }

    pub(crate) fn schema_node_id(&self, node: &Node) -> String {
        self.text(node, &self.config.schema_node_id_property)
    }

    pub(crate) fn is_entity_root(&self, node: &Node) -> bool {
        node.has_property(&self.config.entity_root_property)
    }

    /// The node's value; null counts as absent
    pub(crate) fn value<'n>(&self, node: &'n Node) -> Option<&'n PropertyValue> {
        node.get_property(&self.config.value_property)
            .filter(|value| !value.is_null())
    }

    pub(crate) fn named_node(&self, iri: &str) -> ConvertResult<NamedNode> {
        if self.config.strict_iris {
            Ok(NamedNode::new(iri)?)
        } else {
            Ok(NamedNode::new_unchecked(iri))
        }
    }

    pub(crate) fn predicate_term(&self, iri: &str) -> ConvertResult<RdfPredicate> {
        self.named_node(iri).map(RdfPredicate::from)
    }

    /// Literal for a node holding a scalar value, `None` otherwise
    ///
    /// A language tag wins over `rdfType`; without either the literal is a
    /// plain `xsd:string`.
    pub(crate) fn literal(&self, node: &Node) -> ConvertResult<Option<Literal>> {
        let Some(lexical) = self.value(node).and_then(PropertyValue::lexical_form) else {
            return Ok(None);
        };

        if let Some(lang) = self.language(node) {
            let literal = if self.config.strict_iris {
                Literal::new_language_tagged_literal(lexical, lang)?
            } else {
                Literal::new_language_tagged_literal_unchecked(lexical, lang)
            };
            return Ok(Some(literal));
        }

        let datatype = self.rdf_type(node);
        if datatype.is_empty() {
            Ok(Some(Literal::new_simple_literal(lexical)))
        } else {
            Ok(Some(Literal::new_typed_literal(lexical, self.named_node(&datatype)?)))
        }
    }
}
