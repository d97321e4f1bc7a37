//! Decode mapper: read document model → normalized [`Ebook`] record.
//!
//! Mapping is total: once a document has deserialized, decoding cannot
//! fail. Data anomalies degrade field by field — a non-numeric identifier
//! or year becomes zero, a subject or bookshelf node missing its value or
//! scheme is dropped, a contributor with no agent profile keeps only the
//! identifier from its reference URL.

use indexmap::IndexSet;

use super::read_model as rm;
use crate::ebook::{Bookshelf, BookType, Creator, Ebook, File, Language, Subject};
use crate::relator::MarcRelator;

/// Maps a deserialized document to the domain record.
pub(crate) fn ebook_from_rdf(doc: &rm::Rdf) -> Ebook {
    let source = &doc.ebook;

    let mut ebook = Ebook {
        id: id_from_uri(&source.about),
        titles: split_multiline(&source.titles),
        alternate_titles: split_multiline(&source.alternatives),
        table_of_contents: source.table_of_contents.clone(),
        book_type: book_type(source),
        release_date: source
            .issued
            .as_ref()
            .map(|lit| lit.value.clone())
            .unwrap_or_default(),
        languages: languages(source),
        publisher: source.publisher.clone(),
        published_year: parse_year(&source.published_year),
        summary: source.summary.clone(),
        series: split_multiline(&source.series),
        copyright: source.rights.clone(),
        copyright_clearance: source.clearance.clone(),
        publication_note: source.publication_note.clone(),
        edition_note: source.edition_note.clone(),
        production_notes: source.production_notes.clone(),
        physical_description_note: source.physical_description.clone(),
        source_links: source.source_links.clone(),
        lccn: source.lccn.clone(),
        isbn: source.isbn.clone(),
        book_covers: source.book_covers.iter().map(|c| book_cover_path(c)).collect(),
        title_page_image: source.title_page_image.clone(),
        back_cover: source.back_cover_image.clone(),
        creators: creators(source),
        subjects: subjects(&source.subjects),
        files: files(&source.has_formats),
        bookshelves: bookshelves(&source.bookshelves),
        downloads: source.downloads.as_ref().map_or(0, |lit| lit.value),
        notes: source.descriptions.clone(),
        author_links: Vec::new(),
        cc_comment: doc.work.comment.clone(),
        cc_license: doc.work.license.resource.clone(),
    };

    for node in &doc.descriptions {
        if let (Some(about), Some(description)) = (&node.about, &node.description) {
            ebook.add_author_link(about.clone(), description.clone());
        }
    }

    ebook
}

/// Extracts the trailing numeric path segment of a record or agent URI,
/// e.g. `ebooks/11` → 11. Anything non-numeric degrades to zero.
pub(crate) fn id_from_uri(uri: &str) -> u32 {
    uri.rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

/// Splits each source string on embedded line breaks (any of CR, LF,
/// CRLF), trims the pieces, and drops empty ones.
pub(crate) fn split_multiline(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| {
            value
                .replace("\r\n", "\n")
                .replace('\r', "\n")
                .split('\n')
                .map(|piece| piece.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Lenient year parsing: the corpus contains values like `"Various"`,
/// which degrade to zero rather than failing the decode.
pub(crate) fn parse_year(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

/// Normalizes a cover path to be relative to the HTML ebook directory:
/// everything up to and including the `-h` directory marker is dropped.
pub(crate) fn book_cover_path(cover: &str) -> String {
    let tail = cover.rsplit("-h").next().unwrap_or(cover);
    tail.trim_start_matches('/').to_string()
}

fn book_type(source: &rm::Ebook) -> BookType {
    source
        .book_type
        .as_ref()
        .and_then(|node| node.description.value.as_ref())
        .map_or(BookType::Unknown, |value| BookType::parse(&value.data))
}

/// The document vocabulary has one dialect slot and one notes list for the
/// whole record; both attach to the first language.
fn languages(source: &rm::Ebook) -> Vec<Language> {
    let mut languages: Vec<Language> = source
        .languages
        .iter()
        .filter_map(|node| node.description.value.as_ref())
        .map(|value| Language {
            code: value.data.clone(),
            dialect: None,
            notes: Vec::new(),
        })
        .collect();

    if let Some(first) = languages.first_mut() {
        if !source.language_dialect.is_empty() {
            first.dialect = Some(source.language_dialect.clone());
        }
        first.notes = source.language_notes.clone();
    }

    languages
}

fn creators(source: &rm::Ebook) -> Vec<Creator> {
    let role_lists: [(MarcRelator, &Vec<rm::AgentRef>); 26] = [
        (MarcRelator::Adp, &source.adapters),
        (MarcRelator::Aft, &source.afterword_authors),
        (MarcRelator::Ann, &source.annotators),
        (MarcRelator::Arr, &source.arrangers),
        (MarcRelator::Art, &source.artists),
        (MarcRelator::Aui, &source.introduction_authors),
        (MarcRelator::Cmm, &source.commentators),
        (MarcRelator::Cmp, &source.composers),
        (MarcRelator::Cnd, &source.conductors),
        (MarcRelator::Com, &source.compilers),
        (MarcRelator::Ctb, &source.contributors),
        (MarcRelator::Dub, &source.dubious_authors),
        (MarcRelator::Edt, &source.editors),
        (MarcRelator::Egr, &source.engravers),
        (MarcRelator::Ill, &source.illustrators),
        (MarcRelator::Lbt, &source.librettists),
        (MarcRelator::Oth, &source.others),
        (MarcRelator::Pbl, &source.publishers),
        (MarcRelator::Pht, &source.photographers),
        (MarcRelator::Prf, &source.performers),
        (MarcRelator::Prt, &source.printers),
        (MarcRelator::Res, &source.researchers),
        (MarcRelator::Trc, &source.transcribers),
        (MarcRelator::Trl, &source.translators),
        (MarcRelator::Clb, &source.collaborators),
        (MarcRelator::Unk, &source.unknown_contributors),
    ];

    let mut creators: Vec<Creator> = source
        .creators
        .iter()
        .map(|entry| creator_from_agent_ref(entry, MarcRelator::Aut))
        .collect();
    for (role, entries) in role_lists {
        creators.extend(
            entries
                .iter()
                .map(|entry| creator_from_agent_ref(entry, role)),
        );
    }
    creators
}

/// A contributor entry with no inline agent profile still identifies the
/// agent through its reference URL; everything else stays empty.
fn creator_from_agent_ref(entry: &rm::AgentRef, role: MarcRelator) -> Creator {
    let Some(agent) = &entry.agent else {
        return Creator {
            id: id_from_uri(&entry.resource),
            role,
            ..Creator::default()
        };
    };

    let id_source = if agent.about.is_empty() {
        &entry.resource
    } else {
        &agent.about
    };

    Creator {
        id: id_from_uri(id_source),
        name: agent.name.clone(),
        aliases: agent.aliases.clone(),
        born: agent.birth_year.as_ref().map_or(0, |lit| lit.value),
        died: agent.death_year.as_ref().map_or(0, |lit| lit.value),
        role,
        web_pages: agent.webpages.iter().map(|w| w.resource.clone()).collect(),
    }
}

fn subjects(nodes: &[rm::DescriptionNode]) -> Vec<Subject> {
    nodes
        .iter()
        .filter_map(|node| {
            let value = node.description.value.as_ref()?;
            let member_of = node.description.member_of.as_ref()?;
            Some(Subject {
                heading: value.data.clone(),
                schema: member_of.resource.clone(),
            })
        })
        .collect()
}

fn bookshelves(nodes: &[rm::DescriptionNode]) -> Vec<Bookshelf> {
    nodes
        .iter()
        .filter_map(|node| {
            let value = node.description.value.as_ref()?;
            let member_of = node.description.member_of.as_ref()?;
            Some(Bookshelf {
                name: value.data.clone(),
                resource: member_of.resource.clone(),
            })
        })
        .collect()
}

fn files(nodes: &[rm::HasFormat]) -> Vec<File> {
    nodes
        .iter()
        .map(|node| {
            let source = &node.file;
            let mut encodings = IndexSet::new();
            for format in &source.formats {
                if let Some(value) = &format.description.value {
                    encodings.insert(value.data.clone());
                }
            }
            File {
                url: source.about.clone(),
                extent: source.extent.as_ref().map_or(0, |lit| lit.value),
                modified: source
                    .modified
                    .as_ref()
                    .map(|lit| lit.value.clone())
                    .unwrap_or_default(),
                encodings,
            }
        })
        .collect()
}
