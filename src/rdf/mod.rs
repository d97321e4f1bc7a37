//! The RDF/XML transformation engine.
//!
//! Two independent document models sit between the wire format and the
//! domain record: [`read_model`] tolerates everything the corpus contains,
//! [`write_model`] pins the element order, datatypes, and namespace
//! declarations of the output. The [`decode`] and [`encode`] mappers move
//! data between each model and [`Ebook`]. This module wires them to actual
//! bytes.

pub mod namespaces;
pub mod node_id;

pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod read_model;
pub(crate) mod write_model;

use std::io::{Read, Write};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::ebook::Ebook;
use crate::error::{RdfError, Result};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

lazy_static! {
    static ref EMPTY_ELEMENT: Regex =
        Regex::new(r"<([A-Za-z][A-Za-z0-9:._-]*)((?:\s[^<>]*)?)>\s*</([A-Za-z][A-Za-z0-9:._-]*)>")
            .unwrap();
}

/// Reads and decodes one catalog RDF/XML record.
pub(crate) fn read_ebook<R: Read>(mut reader: R) -> Result<Ebook> {
    let mut xml = String::new();
    reader.read_to_string(&mut xml)?;
    let doc: read_model::Rdf =
        quick_xml::de::from_str(&xml).map_err(|err| RdfError::MalformedDocument(err.to_string()))?;
    Ok(decode::ebook_from_rdf(&doc))
}

/// Encodes a record and writes the document bytes out.
pub(crate) fn write_ebook<W: Write>(ebook: &Ebook, mut writer: W) -> Result<()> {
    let document = write_ebook_string(ebook)?;
    writer.write_all(document.as_bytes())?;
    Ok(())
}

/// Encodes a record as a complete RDF/XML document string: declaration
/// line, 2-space indent, empty elements collapsed to self-closing form.
pub(crate) fn write_ebook_string(ebook: &Ebook) -> Result<String> {
    let doc = encode::rdf_from_ebook(ebook);
    let mut body = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut body);
    ser.indent(' ', 2);
    doc.serialize(ser)
        .map_err(|err| RdfError::Serialization(err.to_string()))?;
    Ok(format!("{XML_DECLARATION}\n{}", collapse_empty_elements(&body)))
}

/// Rewrites `<tag attrs></tag>` pairs with nothing between them as
/// `<tag attrs/>`, the form the catalog generator emits.
fn collapse_empty_elements(xml: &str) -> String {
    EMPTY_ELEMENT
        .replace_all(xml, |caps: &Captures<'_>| {
            if caps[1] == caps[3] {
                format!("<{}{}/>", &caps[1], &caps[2])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
