//! RDF serialization
//!
//! Writes converted quads as N-Quads through the rio formatters.
//! `xsd:string` literals are written as simple literals.

use crate::rdf::{Literal, Quad, RdfObject, RdfSubject, XSD_STRING};
use rio_api::formatter::QuadsFormatter;
use rio_api::model as rio;
use rio_turtle::NQuadsFormatter;
use std::io::Write;
use thiserror::Error;

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// N-Quads serializer
pub struct NQuadsSerializer;

impl NQuadsSerializer {
    /// Serialize quads to an N-Quads string
    pub fn serialize(quads: &[Quad]) -> SerializeResult<String> {
        let mut output = Vec::new();
        Self::write_to(quads, &mut output)?;
        String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
    }

    /// Write quads as N-Quads, one statement per line
    pub fn write_to<W: Write>(quads: &[Quad], mut writer: W) -> SerializeResult<()> {
        {
            let mut formatter = NQuadsFormatter::new(&mut writer);
            for quad in quads {
                formatter.format(&to_rio_quad(quad))?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

fn to_rio_quad(quad: &Quad) -> rio::Quad<'_> {
    let subject = match &quad.subject {
        RdfSubject::NamedNode(n) => rio::Subject::NamedNode(rio::NamedNode { iri: n.as_str() }),
        RdfSubject::BlankNode(b) => rio::Subject::BlankNode(rio::BlankNode { id: b.as_str() }),
    };

    let object = match &quad.object {
        RdfObject::NamedNode(n) => rio::Term::NamedNode(rio::NamedNode { iri: n.as_str() }),
        RdfObject::BlankNode(b) => rio::Term::BlankNode(rio::BlankNode { id: b.as_str() }),
        RdfObject::Literal(l) => rio::Term::Literal(to_rio_literal(l)),
    };

    rio::Quad {
        subject,
        predicate: rio::NamedNode {
            iri: quad.predicate.as_str(),
        },
        object,
        graph_name: quad
            .graph
            .as_ref()
            .map(|g| rio::GraphName::NamedNode(rio::NamedNode { iri: g.as_str() })),
    }
}

fn to_rio_literal(literal: &Literal) -> rio::Literal<'_> {
    if let Some(language) = literal.language() {
        return rio::Literal::LanguageTaggedString {
            value: literal.value(),
            language,
        };
    }
    let datatype = literal.inner().datatype().as_str();
    if datatype == XSD_STRING {
        rio::Literal::Simple {
            value: literal.value(),
        }
    } else {
        rio::Literal::Typed {
            value: literal.value(),
            datatype: rio::NamedNode { iri: datatype },
        }
    }
}
