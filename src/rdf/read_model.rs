//! Read document model: passive serde shapes mirroring the catalog
//! RDF/XML dialect as found in the wild.
//!
//! Every field defaults when absent. Records in the corpus omit elements
//! freely, so nothing here is required; a document containing only the
//! `<rdf:RDF>` envelope deserializes to an all-default [`Rdf`]. Values that
//! should be numeric (`marc906` in particular contains strings like
//! `"Various"`) are read as raw text and parsed later by the decode mapper.
//!
//! The deserializer matches elements and attributes by local name with the
//! namespace prefix stripped, so the renames here are unqualified (`ebook`,
//! `title`, `@about`). The write model is the other half of that asymmetry:
//! its renames carry the `pgterms:`/`dcterms:` prefixes because the
//! serializer emits them verbatim.
//!
//! This model is read-only. Its counterpart for output lives in
//! [`super::write_model`]; the two are kept independent because the input
//! shapes must tolerate everything while the output shapes must pin element
//! order and datatype attributes.

use serde::Deserialize;

/// The `<rdf:RDF>` document envelope.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Rdf {
    #[serde(rename = "@base")]
    pub base: Option<String>,
    #[serde(rename = "ebook")]
    pub ebook: Ebook,
    #[serde(rename = "Description")]
    pub descriptions: Vec<Description>,
    #[serde(rename = "Work")]
    pub work: Work,
}

/// The `<pgterms:ebook>` block carrying the record proper.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Ebook {
    #[serde(rename = "@about")]
    pub about: String,
    #[serde(rename = "title")]
    pub titles: Vec<String>,
    #[serde(rename = "alternative")]
    pub alternatives: Vec<String>,
    #[serde(rename = "tableOfContents")]
    pub table_of_contents: String,
    #[serde(rename = "publisher")]
    pub publisher: String,
    /// marc906 — original publication year; raw text, not always numeric.
    #[serde(rename = "marc906")]
    pub published_year: String,
    #[serde(rename = "issued")]
    pub issued: Option<TypedLiteral<String>>,
    /// marc520 — summary of the work.
    #[serde(rename = "marc520")]
    pub summary: String,
    /// marc440 — series statement, possibly newline-separated.
    #[serde(rename = "marc440")]
    pub series: Vec<String>,
    #[serde(rename = "language")]
    pub languages: Vec<DescriptionNode>,
    /// marc907 — language subdivision, one document-level slot.
    #[serde(rename = "marc907")]
    pub language_dialect: String,
    /// marc546 — language notes, one document-level list.
    #[serde(rename = "marc546")]
    pub language_notes: Vec<String>,
    /// marc260 — publication note for the source material.
    #[serde(rename = "marc260")]
    pub publication_note: String,
    /// marc250 — edition note.
    #[serde(rename = "marc250")]
    pub edition_note: String,
    /// marc508 — production credits.
    #[serde(rename = "marc508")]
    pub production_notes: Vec<String>,
    #[serde(rename = "license")]
    pub license: ResourceRef,
    #[serde(rename = "rights")]
    pub rights: String,
    /// marc905 — copyright clearance code.
    #[serde(rename = "marc905")]
    pub clearance: String,
    #[serde(rename = "type")]
    pub book_type: Option<DescriptionNode>,
    #[serde(rename = "description")]
    pub descriptions: Vec<String>,
    /// marc300 — physical description of the source.
    #[serde(rename = "marc300")]
    pub physical_description: String,
    /// marc904 — links to the source of the work.
    #[serde(rename = "marc904")]
    pub source_links: Vec<String>,
    /// marc010 — Library of Congress Control Number.
    #[serde(rename = "marc010")]
    pub lccn: String,
    /// marc020 — ISBN of the source edition.
    #[serde(rename = "marc020")]
    pub isbn: String,
    /// marc901 — book cover paths/URLs.
    #[serde(rename = "marc901")]
    pub book_covers: Vec<String>,
    /// marc902 — title page image URL.
    #[serde(rename = "marc902")]
    pub title_page_image: String,
    /// marc903 — back cover image URL.
    #[serde(rename = "marc903")]
    pub back_cover_image: String,
    #[serde(rename = "creator")]
    pub creators: Vec<AgentRef>,
    #[serde(rename = "adp")]
    pub adapters: Vec<AgentRef>,
    #[serde(rename = "aft")]
    pub afterword_authors: Vec<AgentRef>,
    #[serde(rename = "ann")]
    pub annotators: Vec<AgentRef>,
    #[serde(rename = "arr")]
    pub arrangers: Vec<AgentRef>,
    #[serde(rename = "art")]
    pub artists: Vec<AgentRef>,
    #[serde(rename = "aui")]
    pub introduction_authors: Vec<AgentRef>,
    #[serde(rename = "cmm")]
    pub commentators: Vec<AgentRef>,
    #[serde(rename = "cmp")]
    pub composers: Vec<AgentRef>,
    #[serde(rename = "cnd")]
    pub conductors: Vec<AgentRef>,
    #[serde(rename = "com")]
    pub compilers: Vec<AgentRef>,
    #[serde(rename = "ctb")]
    pub contributors: Vec<AgentRef>,
    #[serde(rename = "dub")]
    pub dubious_authors: Vec<AgentRef>,
    #[serde(rename = "edt")]
    pub editors: Vec<AgentRef>,
    #[serde(rename = "egr")]
    pub engravers: Vec<AgentRef>,
    #[serde(rename = "ill")]
    pub illustrators: Vec<AgentRef>,
    #[serde(rename = "lbt")]
    pub librettists: Vec<AgentRef>,
    #[serde(rename = "oth")]
    pub others: Vec<AgentRef>,
    #[serde(rename = "pbl")]
    pub publishers: Vec<AgentRef>,
    #[serde(rename = "pht")]
    pub photographers: Vec<AgentRef>,
    #[serde(rename = "prf")]
    pub performers: Vec<AgentRef>,
    #[serde(rename = "prt")]
    pub printers: Vec<AgentRef>,
    #[serde(rename = "res")]
    pub researchers: Vec<AgentRef>,
    #[serde(rename = "trc")]
    pub transcribers: Vec<AgentRef>,
    #[serde(rename = "trl")]
    pub translators: Vec<AgentRef>,
    #[serde(rename = "clb")]
    pub collaborators: Vec<AgentRef>,
    #[serde(rename = "unk")]
    pub unknown_contributors: Vec<AgentRef>,
    #[serde(rename = "subject")]
    pub subjects: Vec<DescriptionNode>,
    #[serde(rename = "hasFormat")]
    pub has_formats: Vec<HasFormat>,
    #[serde(rename = "bookshelf")]
    pub bookshelves: Vec<DescriptionNode>,
    #[serde(rename = "downloads")]
    pub downloads: Option<TypedLiteral<u32>>,
}

/// A scalar value carrying an optional `rdf:datatype` attribute.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TypedLiteral<T: Default> {
    #[serde(rename = "@datatype")]
    pub datatype: Option<String>,
    #[serde(rename = "$text")]
    pub value: T,
}

/// An element whose only content is an `rdf:resource` reference attribute.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResourceRef {
    #[serde(rename = "@resource")]
    pub resource: String,
}

/// An element wrapping a single nested `<rdf:Description>`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DescriptionNode {
    #[serde(rename = "Description")]
    pub description: Description,
}

/// The generic `<rdf:Description>` node.
///
/// Depending on context it carries a typed value (languages, subjects,
/// work types, file formats), a `dcam:memberOf` scheme reference
/// (subjects, bookshelves, types, formats), or a free-text description
/// (top-level author links). All parts are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Description {
    #[serde(rename = "@about")]
    pub about: Option<String>,
    #[serde(rename = "@nodeID")]
    pub node_id: Option<String>,
    #[serde(rename = "value")]
    pub value: Option<Value>,
    #[serde(rename = "memberOf")]
    pub member_of: Option<ResourceRef>,
    #[serde(rename = "description")]
    pub description: Option<String>,
}

/// The `<rdf:value>` leaf inside a description node.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Value {
    #[serde(rename = "@datatype")]
    pub datatype: Option<String>,
    #[serde(rename = "$text")]
    pub data: String,
}

/// A contributor entry: either a bare `rdf:resource` reference or an
/// inline `<pgterms:agent>` profile (occasionally both).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AgentRef {
    #[serde(rename = "@resource")]
    pub resource: String,
    #[serde(rename = "agent")]
    pub agent: Option<Agent>,
}

/// The `<pgterms:agent>` profile for a contributor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Agent {
    #[serde(rename = "@about")]
    pub about: String,
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "alias")]
    pub aliases: Vec<String>,
    #[serde(rename = "birthdate")]
    pub birth_year: Option<TypedLiteral<i32>>,
    #[serde(rename = "deathdate")]
    pub death_year: Option<TypedLiteral<i32>>,
    #[serde(rename = "webpage")]
    pub webpages: Vec<ResourceRef>,
}

/// A `<dcterms:hasFormat>` element wrapping one file resource.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HasFormat {
    #[serde(rename = "file")]
    pub file: File,
}

/// The `<pgterms:file>` block for a downloadable resource.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct File {
    #[serde(rename = "@about")]
    pub about: String,
    #[serde(rename = "extent")]
    pub extent: Option<TypedLiteral<u64>>,
    #[serde(rename = "modified")]
    pub modified: Option<TypedLiteral<String>>,
    #[serde(rename = "isFormatOf")]
    pub is_format_of: ResourceRef,
    #[serde(rename = "format")]
    pub formats: Vec<DescriptionNode>,
}

/// The `<cc:Work>` license block.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Work {
    #[serde(rename = "@about")]
    pub about: Option<String>,
    #[serde(rename = "comment")]
    pub comment: String,
    #[serde(rename = "license")]
    pub license: ResourceRef,
}
