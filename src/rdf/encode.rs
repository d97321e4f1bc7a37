//! Encode mapper: normalized [`Ebook`] record → write document model.
//!
//! The inverse of [`super::decode`]: the flat creator list is partitioned
//! back into per-role element blocks, multi-value title and series fields
//! are rejoined with `\n`, datatype attributes are re-attached, and every
//! blank description node gets a fresh synthetic identifier. Encoding is
//! total; no `Ebook` state is rejected.

use super::namespaces as ns;
use super::node_id::NodeIdGenerator;
use super::write_model as wm;
use crate::ebook::{BookType, Creator, Ebook};
use crate::relator::MarcRelator;

/// Builds a write-model document from the domain record. Each call uses its
/// own node-ID generator, so repeated encodings of the same record produce
/// equivalent documents with different blank-node labels.
pub(crate) fn rdf_from_ebook(ebook: &Ebook) -> wm::Rdf {
    let mut ids = NodeIdGenerator::new();

    let mut out = wm::Ebook {
        about: format!("ebooks/{}", ebook.id),
        title: join_lines(&ebook.titles),
        alternatives: ebook.alternate_titles.clone(),
        table_of_contents: ebook.table_of_contents.clone(),
        publisher: ebook.publisher.clone(),
        published_year: (ebook.published_year != 0).then(|| ebook.published_year.to_string()),
        issued: wm::TypedLiteral::new(ns::XSD_DATE, ebook.release_date.clone()),
        summary: ebook.summary.clone(),
        series: join_lines(&ebook.series),
        languages: languages(ebook, &mut ids),
        language_dialect: ebook
            .languages
            .first()
            .and_then(|l| l.dialect.clone())
            .unwrap_or_default(),
        language_notes: ebook
            .languages
            .first()
            .map(|l| l.notes.clone())
            .unwrap_or_default(),
        publication_note: ebook.publication_note.clone(),
        edition_note: ebook.edition_note.clone(),
        production_notes: ebook.production_notes.clone(),
        license: wm::ResourceRef {
            resource: "license".to_string(),
        },
        rights: ebook.copyright.clone(),
        clearance: ebook.copyright_clearance.clone(),
        book_type: book_type(ebook.book_type, &mut ids),
        descriptions: ebook.notes.clone(),
        physical_description: ebook.physical_description_note.clone(),
        source_links: ebook.source_links.clone(),
        lccn: ebook.lccn.clone(),
        isbn: ebook.isbn.clone(),
        book_covers: ebook
            .book_covers
            .iter()
            .map(|cover| book_cover_uri(ebook.id, cover))
            .collect(),
        title_page_image: ebook.title_page_image.clone(),
        back_cover_image: ebook.back_cover.clone(),
        subjects: member_nodes(
            &ebook.subjects,
            |s| (&s.heading, &s.schema),
            &mut ids,
        ),
        has_formats: files(ebook, &mut ids),
        bookshelves: member_nodes(
            &ebook.bookshelves,
            |b| (&b.name, &b.resource),
            &mut ids,
        ),
        downloads: wm::TypedLiteral::new(ns::XSD_INTEGER, ebook.downloads),
        ..wm::Ebook::default()
    };

    for creator in &ebook.creators {
        role_bucket(&mut out, creator.role).push(agent_ref(creator));
    }

    wm::Rdf {
        ebook: out,
        descriptions: ebook
            .author_links
            .iter()
            .map(|link| wm::Description {
                about: Some(link.url.clone()),
                description: Some(link.description.clone()),
                ..wm::Description::default()
            })
            .collect(),
        work: wm::Work {
            about: Some(String::new()),
            comment: ebook.cc_comment.clone(),
            license: wm::ResourceRef {
                resource: ebook.cc_license.clone(),
            },
        },
        ..wm::Rdf::default()
    }
}

fn join_lines(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join("\n"))
    }
}

/// Full catalog URI of a cover image inside the HTML ebook directory.
fn book_cover_uri(id: u32, cover: &str) -> String {
    format!("file:///files/{id}/{id}-h/{cover}")
}

fn languages(ebook: &Ebook, ids: &mut NodeIdGenerator) -> Vec<wm::DescriptionNode> {
    ebook
        .languages
        .iter()
        .map(|language| wm::DescriptionNode {
            description: wm::Description {
                node_id: Some(ids.generate()),
                value: Some(wm::Value {
                    datatype: Some(ns::RFC4646),
                    data: language.code.clone(),
                }),
                ..wm::Description::default()
            },
        })
        .collect()
}

fn book_type(book_type: BookType, ids: &mut NodeIdGenerator) -> wm::DescriptionNode {
    wm::DescriptionNode {
        description: wm::Description {
            node_id: Some(ids.generate()),
            value: Some(wm::Value {
                datatype: None,
                data: book_type.as_str().to_string(),
            }),
            member_of: Some(wm::ResourceRef {
                resource: ns::DCMI_TYPE.to_string(),
            }),
            ..wm::Description::default()
        },
    }
}

// Subjects and bookshelves share the value + dcam:memberOf node shape.
fn member_nodes<'a, T>(
    items: &'a [T],
    project: fn(&'a T) -> (&'a str, &'a str),
    ids: &mut NodeIdGenerator,
) -> Vec<wm::DescriptionNode> {
    items
        .iter()
        .map(|item| {
            let (value, member_of) = project(item);
            wm::DescriptionNode {
                description: wm::Description {
                    node_id: Some(ids.generate()),
                    value: Some(wm::Value {
                        datatype: None,
                        data: value.to_string(),
                    }),
                    member_of: Some(wm::ResourceRef {
                        resource: member_of.to_string(),
                    }),
                    ..wm::Description::default()
                },
            }
        })
        .collect()
}

fn files(ebook: &Ebook, ids: &mut NodeIdGenerator) -> Vec<wm::HasFormat> {
    ebook
        .files
        .iter()
        .map(|file| wm::HasFormat {
            file: wm::File {
                about: file.url.clone(),
                extent: wm::TypedLiteral::new(ns::XSD_INTEGER, file.extent),
                modified: wm::TypedLiteral::new(ns::XSD_DATE_TIME, file.modified.clone()),
                is_format_of: wm::ResourceRef {
                    resource: format!("ebooks/{}", ebook.id),
                },
                formats: file
                    .encodings
                    .iter()
                    .map(|encoding| wm::DescriptionNode {
                        description: wm::Description {
                            node_id: Some(ids.generate()),
                            value: Some(wm::Value {
                                datatype: Some(ns::IMT),
                                data: encoding.clone(),
                            }),
                            member_of: Some(wm::ResourceRef {
                                resource: ns::IMT.to_string(),
                            }),
                            ..wm::Description::default()
                        },
                    })
                    .collect(),
            },
        })
        .collect()
}

/// A creator with no profile data is written back as a bare reference,
/// mirroring how it decoded.
fn agent_ref(creator: &Creator) -> wm::AgentRef {
    let uri = format!("2009/agents/{}", creator.id);
    if has_no_profile(creator) {
        return wm::AgentRef {
            resource: Some(uri),
            agent: None,
        };
    }

    wm::AgentRef {
        resource: None,
        agent: Some(wm::Agent {
            about: uri,
            name: creator.name.clone(),
            aliases: creator.aliases.clone(),
            birth_year: year_literal(creator.born),
            death_year: year_literal(creator.died),
            webpages: creator
                .web_pages
                .iter()
                .map(|url| wm::ResourceRef {
                    resource: url.clone(),
                })
                .collect(),
        }),
    }
}

fn has_no_profile(creator: &Creator) -> bool {
    creator.name.is_empty()
        && creator.aliases.is_empty()
        && creator.born == 0
        && creator.died == 0
        && creator.web_pages.is_empty()
}

/// Zero means unknown; unknown years get no element at all.
fn year_literal(year: i32) -> Option<wm::TypedLiteral<i32>> {
    (year != 0).then(|| wm::TypedLiteral::new(ns::XSD_INTEGER, year))
}

fn role_bucket(out: &mut wm::Ebook, role: MarcRelator) -> &mut Vec<wm::AgentRef> {
    match role {
        MarcRelator::Aut => &mut out.creators,
        MarcRelator::Adp => &mut out.adapters,
        MarcRelator::Aft => &mut out.afterword_authors,
        MarcRelator::Ann => &mut out.annotators,
        MarcRelator::Arr => &mut out.arrangers,
        MarcRelator::Art => &mut out.artists,
        MarcRelator::Aui => &mut out.introduction_authors,
        MarcRelator::Cmm => &mut out.commentators,
        MarcRelator::Cmp => &mut out.composers,
        MarcRelator::Cnd => &mut out.conductors,
        MarcRelator::Com => &mut out.compilers,
        MarcRelator::Ctb => &mut out.contributors,
        MarcRelator::Dub => &mut out.dubious_authors,
        MarcRelator::Edt => &mut out.editors,
        MarcRelator::Egr => &mut out.engravers,
        MarcRelator::Ill => &mut out.illustrators,
        MarcRelator::Lbt => &mut out.librettists,
        MarcRelator::Oth => &mut out.others,
        MarcRelator::Pbl => &mut out.publishers,
        MarcRelator::Pht => &mut out.photographers,
        MarcRelator::Prf => &mut out.performers,
        MarcRelator::Prt => &mut out.printers,
        MarcRelator::Res => &mut out.researchers,
        MarcRelator::Trc => &mut out.transcribers,
        MarcRelator::Trl => &mut out.translators,
        MarcRelator::Clb => &mut out.collaborators,
        MarcRelator::Unk => &mut out.unknown_contributors,
    }
}
