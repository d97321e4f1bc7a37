//! The normalized catalog record and its nested value types.
//!
//! [`Ebook`] hides the shape irregularities of the source RDF vocabulary
//! behind a flat, English-named record that application code can read,
//! modify, and feed back to the encoder. It carries no wire artifacts:
//! blank-node identifiers, datatype attributes, and per-role element names
//! all live in the document models under [`crate::rdf`].

use std::io::{Read, Write};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rdf;
use crate::relator::MarcRelator;

/// The DCMI work type of a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookType {
    /// Written works, by far the most common type.
    Text,
    /// Audio recordings.
    Sound,
    /// Images other than still/moving distinctions.
    Image,
    /// Still images such as photographs and scans.
    StillImage,
    /// Film and other moving images.
    MovingImage,
    /// Data sets.
    Dataset,
    /// Collections of other resources.
    Collection,
    /// Absent or unrecognized type value.
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl BookType {
    /// The string used for this type in the document vocabulary.
    /// [`BookType::Unknown`] has no vocabulary term and maps to an empty string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Sound => "Sound",
            Self::Image => "Image",
            Self::StillImage => "StillImage",
            Self::MovingImage => "MovingImage",
            Self::Dataset => "Dataset",
            Self::Collection => "Collection",
            Self::Unknown => "",
        }
    }

    /// Parses a vocabulary term leniently; anything unrecognized becomes
    /// [`BookType::Unknown`] rather than an error.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "Text" => Self::Text,
            "Sound" => Self::Sound,
            "Image" => Self::Image,
            "StillImage" => Self::StillImage,
            "MovingImage" => Self::MovingImage,
            "Dataset" => Self::Dataset,
            "Collection" => Self::Collection,
            _ => Self::Unknown,
        }
    }
}

/// Language details for a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    /// ISO 639-1 two-letter language code (some records use ISO 639-3).
    pub code: String,
    /// ISO 3166-2 subdivision code, e.g. `GB`. Meaningless without a code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    /// Free-text notes, e.g. "Uses 19th century spelling.".
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// A person involved in the creation of the work: author, illustrator, etc.
///
/// An author is a creator whose role is [`MarcRelator::Aut`], not a separate
/// type. Creator values are fully owned by the [`Ebook::creators`] list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creator {
    /// Unique catalog agent ID.
    pub id: u32,
    /// Name of the creator.
    pub name: String,
    /// Any aliases for the creator.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Year of birth; negative for BC, zero when unknown.
    #[serde(rename = "born_year", skip_serializing_if = "is_zero")]
    pub born: i32,
    /// Year of death; negative for BC, zero when unknown.
    #[serde(rename = "died_year", skip_serializing_if = "is_zero")]
    pub died: i32,
    /// Role of this creator in the work.
    pub role: MarcRelator,
    /// Web links for this creator, usually Wikipedia.
    #[serde(rename = "webpages", skip_serializing_if = "Vec::is_empty")]
    pub web_pages: Vec<String>,
}

/// A downloadable file resource for the ebook: .txt, .epub, .zip, etc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    /// URL of the file at the catalog site.
    pub url: String,
    /// Size of the file in bytes.
    pub extent: u64,
    /// Last-modified timestamp for this resource.
    pub modified: String,
    /// Media-type encodings, deduplicated, insertion order preserved.
    pub encodings: IndexSet<String>,
}

impl File {
    /// Appends a media-type encoding, ignoring duplicates.
    pub fn add_encoding(&mut self, encoding: impl Into<String>) {
        self.encodings.insert(encoding.into());
    }
}

/// A subject heading paired with its vocabulary encoding scheme,
/// usually LCSH or LCC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    /// Heading or other label.
    pub heading: String,
    /// Vocabulary encoding scheme URL, e.g. `http://purl.org/dc/terms/LCSH`.
    pub schema: String,
}

/// A catalog bookshelf the work is listed on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bookshelf {
    /// The bookshelf name.
    pub name: String,
    /// Bookshelf resource path at the catalog, usually `2009/pgterms/Bookshelf`.
    pub resource: String,
}

/// An external resource about an author, usually a Wikipedia link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorLink {
    /// URL for this author.
    pub url: String,
    /// Short description, typically a Wikipedia language tag like `en.wikipedia`.
    pub description: String,
}

/// A normalized catalog record for one published work.
///
/// Decoded from, and encoded to, the catalog's RDF/XML dialect. The record
/// is plain data: the caller owns it outright after decoding, and nothing
/// in this crate retains a reference to it once mapping completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ebook {
    /// Catalog eText number.
    pub id: u32,
    /// Titles for this work, ordered; the first is the primary title.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<String>,
    /// Alternative titles for this work.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_titles: Vec<String>,
    /// The table of contents, when the record provides one.
    pub table_of_contents: String,
    /// Work type: Text, Sound, etc.
    #[serde(rename = "type")]
    pub book_type: BookType,
    /// Date the catalog released this work, as an ISO date string.
    #[serde(rename = "released")]
    pub release_date: String,
    /// Languages of this work; the primary language comes first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
    /// Publisher of this work.
    pub publisher: String,
    /// Original publication year; zero when absent or unparseable.
    #[serde(rename = "published")]
    pub published_year: i32,
    /// A short summary of the work.
    pub summary: String,
    /// Series this work belongs to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<String>,
    /// Rights for this work, e.g. "Public domain in the USA.".
    pub copyright: String,
    /// Distributed Proofreaders copyright clearance code.
    pub copyright_clearance: String,
    /// Publication note of the source material: publisher, city, year.
    pub publication_note: String,
    /// Edition note, e.g. "2nd Edition".
    pub edition_note: String,
    /// Production credits for this release.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub production_notes: Vec<String>,
    /// Physical description of the source of this work.
    pub physical_description_note: String,
    /// Links to information about the source of this work.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_links: Vec<String>,
    /// Library of Congress Control Number.
    pub lccn: String,
    /// Original ISBN of this work.
    pub isbn: String,
    /// Book cover paths, relative to the HTML ebook directory.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub book_covers: Vec<String>,
    /// Title page image URL.
    pub title_page_image: String,
    /// Back cover image URL.
    pub back_cover: String,
    /// Creators of this work, authors first, then the other role blocks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<Creator>,
    /// Subject headings for this work.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<Subject>,
    /// File resources for this work.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    /// Bookshelves this work is listed on.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bookshelves: Vec<Bookshelf>,
    /// Download count over the 30 days before the record was generated.
    pub downloads: u32,
    /// General free-text notes about this eText.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Author links, typically Wikipedia biographies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub author_links: Vec<AuthorLink>,
    /// Creative Commons comment, usually where to find the RDF files.
    pub cc_comment: String,
    /// Creative Commons license URL.
    pub cc_license: String,
}

impl Ebook {
    /// Decodes a catalog RDF/XML document into an `Ebook`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use std::fs::File;
    /// use gutenrdf::Ebook;
    ///
    /// let file = File::open("cache/epub/11/pg11.rdf")?;
    /// let ebook = Ebook::from_rdf(file)?;
    /// println!("{}: {}", ebook.id, ebook.titles[0]);
    /// # Ok::<(), gutenrdf::RdfError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be read or are not a well-formed
    /// XML document. Data anomalies inside a well-formed document never
    /// error; they degrade to zero/empty fields.
    pub fn from_rdf<R: Read>(reader: R) -> Result<Self> {
        rdf::read_ebook(reader)
    }

    /// Encodes this record as a catalog RDF/XML document and writes it out.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization or the underlying write fails;
    /// there is no invalid `Ebook` state that encoding rejects.
    pub fn to_rdf<W: Write>(&self, writer: W) -> Result<()> {
        rdf::write_ebook(self, writer)
    }

    /// Encodes this record as a catalog RDF/XML document string.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization fails.
    pub fn to_rdf_string(&self) -> Result<String> {
        rdf::write_ebook_string(self)
    }

    /// Appends a creator.
    pub fn add_creator(&mut self, creator: Creator) {
        self.creators.push(creator);
    }

    /// Appends a subject heading with its encoding scheme URL.
    pub fn add_subject(&mut self, heading: impl Into<String>, schema: impl Into<String>) {
        self.subjects.push(Subject {
            heading: heading.into(),
            schema: schema.into(),
        });
    }

    /// Appends a bookshelf entry.
    pub fn add_bookshelf(&mut self, name: impl Into<String>, resource: impl Into<String>) {
        self.bookshelves.push(Bookshelf {
            name: name.into(),
            resource: resource.into(),
        });
    }

    /// Appends a file resource.
    pub fn add_file(&mut self, file: File) {
        self.files.push(file);
    }

    /// Appends an author link.
    pub fn add_author_link(&mut self, url: impl Into<String>, description: impl Into<String>) {
        self.author_links.push(AuthorLink {
            url: url.into(),
            description: description.into(),
        });
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &i32) -> bool {
    *value == 0
}
