//! Namespace and datatype URIs used by the catalog RDF/XML dialect.
//!
//! The catalog generator emits one fixed prefix set; the write model
//! declares these URIs on every document and names its elements with the
//! matching prefixes, with no general namespace resolution involved.

/// Base URI of the catalog; record and agent URIs are relative to it.
pub const BASE: &str = "http://www.gutenberg.org/";

/// Dublin Core terms vocabulary.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// Project Gutenberg terms vocabulary.
pub const PGTERMS: &str = "http://www.gutenberg.org/2009/pgterms/";

/// RDF syntax namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF schema namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// Creative Commons work/license vocabulary.
pub const CC: &str = "http://web.resource.org/cc/";

/// Dublin Core abstract model (vocabulary encoding schemes).
pub const DCAM: &str = "http://purl.org/dc/dcam/";

/// Library of Congress MARC relator vocabulary.
pub const MARCREL: &str = "http://id.loc.gov/vocabulary/relators/";

/// XML Schema date datatype, used for the release date.
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

/// XML Schema dateTime datatype, used for file modification stamps.
pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

/// XML Schema integer datatype, used for years, extents, and download counts.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// DCMI type vocabulary, the datatype of the work-type value.
pub const DCMI_TYPE: &str = "http://purl.org/dc/terms/DCMIType";

/// RFC 4646 language-tag datatype.
pub const RFC4646: &str = "http://purl.org/dc/terms/RFC4646";

/// Internet media type datatype, used for file format values.
pub const IMT: &str = "http://purl.org/dc/terms/IMT";
