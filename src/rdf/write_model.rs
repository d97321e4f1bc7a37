//! Write document model: passive serde shapes producing the catalog
//! RDF/XML dialect.
//!
//! Field declaration order here is the element order of the output, matching
//! the order the catalog generator uses. Fixed datatype URIs and the full
//! namespace declaration set are baked in as `&'static str` so the encode
//! mapper only fills in values. Empty optional parts are skipped; the
//! always-present elements (issued, license, rights, type, downloads) are
//! plain fields with no skip rule.

use serde::Serialize;

use super::namespaces as ns;

/// The `<rdf:RDF>` envelope with its full namespace declaration set.
#[derive(Debug, Serialize)]
#[serde(rename = "rdf:RDF")]
pub struct Rdf {
    #[serde(rename = "@xml:base")]
    pub base: &'static str,
    #[serde(rename = "@xmlns:dcterms")]
    pub xmlns_dcterms: &'static str,
    #[serde(rename = "@xmlns:pgterms")]
    pub xmlns_pgterms: &'static str,
    #[serde(rename = "@xmlns:rdf")]
    pub xmlns_rdf: &'static str,
    #[serde(rename = "@xmlns:rdfs")]
    pub xmlns_rdfs: &'static str,
    #[serde(rename = "@xmlns:cc")]
    pub xmlns_cc: &'static str,
    #[serde(rename = "@xmlns:dcam")]
    pub xmlns_dcam: &'static str,
    #[serde(rename = "@xmlns:marcrel")]
    pub xmlns_marcrel: &'static str,
    #[serde(rename = "pgterms:ebook")]
    pub ebook: Ebook,
    #[serde(rename = "rdf:Description", skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<Description>,
    #[serde(rename = "cc:Work")]
    pub work: Work,
}

impl Default for Rdf {
    fn default() -> Self {
        Self {
            base: ns::BASE,
            xmlns_dcterms: ns::DCTERMS,
            xmlns_pgterms: ns::PGTERMS,
            xmlns_rdf: ns::RDF,
            xmlns_rdfs: ns::RDFS,
            xmlns_cc: ns::CC,
            xmlns_dcam: ns::DCAM,
            xmlns_marcrel: ns::MARCREL,
            ebook: Ebook::default(),
            descriptions: Vec::new(),
            work: Work::default(),
        }
    }
}

/// The `<pgterms:ebook>` block, fields in catalog element order.
#[derive(Debug, Default, Serialize)]
pub struct Ebook {
    #[serde(rename = "@rdf:about")]
    pub about: String,
    /// All titles joined with `\n` into one element.
    #[serde(rename = "dcterms:title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "dcterms:alternative", skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
    #[serde(
        rename = "dcterms:tableOfContents",
        skip_serializing_if = "String::is_empty"
    )]
    pub table_of_contents: String,
    #[serde(rename = "dcterms:publisher", skip_serializing_if = "String::is_empty")]
    pub publisher: String,
    #[serde(rename = "pgterms:marc906", skip_serializing_if = "Option::is_none")]
    pub published_year: Option<String>,
    #[serde(rename = "dcterms:issued")]
    pub issued: TypedLiteral<String>,
    #[serde(rename = "pgterms:marc520", skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// All series entries joined with `\n` into one element.
    #[serde(rename = "pgterms:marc440", skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(rename = "dcterms:language", skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<DescriptionNode>,
    #[serde(rename = "pgterms:marc907", skip_serializing_if = "String::is_empty")]
    pub language_dialect: String,
    #[serde(rename = "pgterms:marc546", skip_serializing_if = "Vec::is_empty")]
    pub language_notes: Vec<String>,
    #[serde(rename = "pgterms:marc260", skip_serializing_if = "String::is_empty")]
    pub publication_note: String,
    #[serde(rename = "pgterms:marc250", skip_serializing_if = "String::is_empty")]
    pub edition_note: String,
    #[serde(rename = "pgterms:marc508", skip_serializing_if = "Vec::is_empty")]
    pub production_notes: Vec<String>,
    #[serde(rename = "dcterms:license")]
    pub license: ResourceRef,
    #[serde(rename = "dcterms:rights")]
    pub rights: String,
    #[serde(rename = "pgterms:marc905", skip_serializing_if = "String::is_empty")]
    pub clearance: String,
    #[serde(rename = "dcterms:type")]
    pub book_type: DescriptionNode,
    #[serde(rename = "dcterms:description", skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<String>,
    #[serde(rename = "pgterms:marc300", skip_serializing_if = "String::is_empty")]
    pub physical_description: String,
    #[serde(rename = "pgterms:marc904", skip_serializing_if = "Vec::is_empty")]
    pub source_links: Vec<String>,
    #[serde(rename = "pgterms:marc010", skip_serializing_if = "String::is_empty")]
    pub lccn: String,
    #[serde(rename = "pgterms:marc020", skip_serializing_if = "String::is_empty")]
    pub isbn: String,
    #[serde(rename = "pgterms:marc901", skip_serializing_if = "Vec::is_empty")]
    pub book_covers: Vec<String>,
    #[serde(rename = "pgterms:marc902", skip_serializing_if = "String::is_empty")]
    pub title_page_image: String,
    #[serde(rename = "pgterms:marc903", skip_serializing_if = "String::is_empty")]
    pub back_cover_image: String,
    #[serde(rename = "dcterms:creator", skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<AgentRef>,
    #[serde(rename = "marcrel:adp", skip_serializing_if = "Vec::is_empty")]
    pub adapters: Vec<AgentRef>,
    #[serde(rename = "marcrel:aft", skip_serializing_if = "Vec::is_empty")]
    pub afterword_authors: Vec<AgentRef>,
    #[serde(rename = "marcrel:ann", skip_serializing_if = "Vec::is_empty")]
    pub annotators: Vec<AgentRef>,
    #[serde(rename = "marcrel:arr", skip_serializing_if = "Vec::is_empty")]
    pub arrangers: Vec<AgentRef>,
    #[serde(rename = "marcrel:art", skip_serializing_if = "Vec::is_empty")]
    pub artists: Vec<AgentRef>,
    #[serde(rename = "marcrel:aui", skip_serializing_if = "Vec::is_empty")]
    pub introduction_authors: Vec<AgentRef>,
    #[serde(rename = "marcrel:cmm", skip_serializing_if = "Vec::is_empty")]
    pub commentators: Vec<AgentRef>,
    #[serde(rename = "marcrel:cmp", skip_serializing_if = "Vec::is_empty")]
    pub composers: Vec<AgentRef>,
    #[serde(rename = "marcrel:cnd", skip_serializing_if = "Vec::is_empty")]
    pub conductors: Vec<AgentRef>,
    #[serde(rename = "marcrel:com", skip_serializing_if = "Vec::is_empty")]
    pub compilers: Vec<AgentRef>,
    #[serde(rename = "marcrel:ctb", skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<AgentRef>,
    #[serde(rename = "marcrel:dub", skip_serializing_if = "Vec::is_empty")]
    pub dubious_authors: Vec<AgentRef>,
    #[serde(rename = "marcrel:edt", skip_serializing_if = "Vec::is_empty")]
    pub editors: Vec<AgentRef>,
    #[serde(rename = "marcrel:egr", skip_serializing_if = "Vec::is_empty")]
    pub engravers: Vec<AgentRef>,
    #[serde(rename = "marcrel:ill", skip_serializing_if = "Vec::is_empty")]
    pub illustrators: Vec<AgentRef>,
    #[serde(rename = "marcrel:lbt", skip_serializing_if = "Vec::is_empty")]
    pub librettists: Vec<AgentRef>,
    #[serde(rename = "marcrel:oth", skip_serializing_if = "Vec::is_empty")]
    pub others: Vec<AgentRef>,
    #[serde(rename = "marcrel:pbl", skip_serializing_if = "Vec::is_empty")]
    pub publishers: Vec<AgentRef>,
    #[serde(rename = "marcrel:pht", skip_serializing_if = "Vec::is_empty")]
    pub photographers: Vec<AgentRef>,
    #[serde(rename = "marcrel:prf", skip_serializing_if = "Vec::is_empty")]
    pub performers: Vec<AgentRef>,
    #[serde(rename = "marcrel:prt", skip_serializing_if = "Vec::is_empty")]
    pub printers: Vec<AgentRef>,
    #[serde(rename = "marcrel:res", skip_serializing_if = "Vec::is_empty")]
    pub researchers: Vec<AgentRef>,
    #[serde(rename = "marcrel:trc", skip_serializing_if = "Vec::is_empty")]
    pub transcribers: Vec<AgentRef>,
    #[serde(rename = "marcrel:trl", skip_serializing_if = "Vec::is_empty")]
    pub translators: Vec<AgentRef>,
    #[serde(rename = "marcrel:clb", skip_serializing_if = "Vec::is_empty")]
    pub collaborators: Vec<AgentRef>,
    #[serde(rename = "marcrel:unk", skip_serializing_if = "Vec::is_empty")]
    pub unknown_contributors: Vec<AgentRef>,
    #[serde(rename = "dcterms:subject", skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<DescriptionNode>,
    #[serde(rename = "dcterms:hasFormat", skip_serializing_if = "Vec::is_empty")]
    pub has_formats: Vec<HasFormat>,
    #[serde(rename = "pgterms:bookshelf", skip_serializing_if = "Vec::is_empty")]
    pub bookshelves: Vec<DescriptionNode>,
    #[serde(rename = "pgterms:downloads")]
    pub downloads: TypedLiteral<u32>,
}

/// A scalar value with its fixed `rdf:datatype` attribute.
#[derive(Debug, Default, Serialize)]
pub struct TypedLiteral<T> {
    #[serde(rename = "@rdf:datatype")]
    pub datatype: &'static str,
    #[serde(rename = "$text")]
    pub value: T,
}

impl<T> TypedLiteral<T> {
    pub fn new(datatype: &'static str, value: T) -> Self {
        Self { datatype, value }
    }
}

/// An element carrying only an `rdf:resource` reference.
#[derive(Debug, Default, Serialize)]
pub struct ResourceRef {
    #[serde(rename = "@rdf:resource")]
    pub resource: String,
}

/// An element wrapping a blank `<rdf:Description>` node.
#[derive(Debug, Default, Serialize)]
pub struct DescriptionNode {
    #[serde(rename = "rdf:Description")]
    pub description: Description,
}

/// The generic `<rdf:Description>` node.
#[derive(Debug, Default, Serialize)]
pub struct Description {
    #[serde(rename = "@rdf:about", skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(rename = "@rdf:nodeID", skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(rename = "rdf:value", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(rename = "dcam:memberOf", skip_serializing_if = "Option::is_none")]
    pub member_of: Option<ResourceRef>,
    #[serde(
        rename = "dcterms:description",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// The `<rdf:value>` leaf, with an optional datatype.
#[derive(Debug, Default, Serialize)]
pub struct Value {
    #[serde(rename = "@rdf:datatype", skip_serializing_if = "Option::is_none")]
    pub datatype: Option<&'static str>,
    #[serde(rename = "$text")]
    pub data: String,
}

/// A contributor entry: a bare reference or an inline agent profile.
#[derive(Debug, Default, Serialize)]
pub struct AgentRef {
    #[serde(rename = "@rdf:resource", skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(rename = "pgterms:agent", skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
}

/// The `<pgterms:agent>` profile.
#[derive(Debug, Default, Serialize)]
pub struct Agent {
    #[serde(rename = "@rdf:about")]
    pub about: String,
    #[serde(rename = "pgterms:name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "pgterms:alias", skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(rename = "pgterms:birthdate", skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<TypedLiteral<i32>>,
    #[serde(rename = "pgterms:deathdate", skip_serializing_if = "Option::is_none")]
    pub death_year: Option<TypedLiteral<i32>>,
    #[serde(rename = "pgterms:webpage", skip_serializing_if = "Vec::is_empty")]
    pub webpages: Vec<ResourceRef>,
}

/// A `<dcterms:hasFormat>` element wrapping one file resource.
#[derive(Debug, Default, Serialize)]
pub struct HasFormat {
    #[serde(rename = "pgterms:file")]
    pub file: File,
}

/// The `<pgterms:file>` block for a downloadable resource.
#[derive(Debug, Default, Serialize)]
pub struct File {
    #[serde(rename = "@rdf:about")]
    pub about: String,
    #[serde(rename = "dcterms:extent")]
    pub extent: TypedLiteral<u64>,
    #[serde(rename = "dcterms:modified")]
    pub modified: TypedLiteral<String>,
    #[serde(rename = "dcterms:isFormatOf")]
    pub is_format_of: ResourceRef,
    #[serde(rename = "dcterms:format", skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<DescriptionNode>,
}

/// The `<cc:Work>` license block.
#[derive(Debug, Default, Serialize)]
pub struct Work {
    #[serde(rename = "@rdf:about", skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(rename = "rdfs:comment", skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(rename = "cc:license")]
    pub license: ResourceRef,
}
