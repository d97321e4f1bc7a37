//! Encode assertions: build a record in code, inspect the emitted document.

use gutenrdf::{BookType, Creator, Ebook, File, Language, MarcRelator};
use regex::Regex;

fn sample_ebook() -> Ebook {
    let mut ebook = Ebook {
        id: 999_991_234,
        titles: vec!["Great Expectations".to_string()],
        book_type: BookType::Text,
        release_date: "1998-07-01".to_string(),
        languages: vec![Language {
            code: "en".to_string(),
            dialect: Some("GB".to_string()),
            notes: vec!["Uses 19th century spelling.".to_string()],
        }],
        publisher: "Project Gutenberg".to_string(),
        published_year: 1861,
        series: vec!["Dickens Best Of".to_string()],
        copyright: "Public domain in the USA.".to_string(),
        book_covers: vec!["images/cover.jpg".to_string()],
        downloads: 16_579,
        cc_comment: "Archives can be downloaded from our website.".to_string(),
        cc_license: "https://creativecommons.org/publicdomain/zero/1.0/".to_string(),
        ..Ebook::default()
    };

    ebook.add_creator(Creator {
        id: 37,
        name: "Dickens, Charles".to_string(),
        aliases: vec!["Boz".to_string()],
        born: 1812,
        died: 1870,
        role: MarcRelator::Aut,
        web_pages: vec!["https://en.wikipedia.org/wiki/Charles_Dickens".to_string()],
    });
    ebook.add_creator(Creator {
        id: 1736,
        name: "Wyllie, David".to_string(),
        role: MarcRelator::Trl,
        ..Creator::default()
    });
    ebook.add_subject("Orphans -- Fiction", "http://purl.org/dc/terms/LCSH");
    ebook.add_bookshelf("Best Books Ever Listings", "2009/pgterms/Bookshelf");

    let mut file = File {
        url: "https://www.example.org/files/999991234/999991234-8.zip".to_string(),
        extent: 393_579,
        modified: "2015-11-06T09:50:04".to_string(),
        ..File::default()
    };
    file.add_encoding("application/zip");
    ebook.add_file(file);
    ebook.add_author_link("https://en.wikipedia.org/wiki/Charles_Dickens", "en.wikipedia");

    ebook
}

#[test]
fn document_starts_with_the_xml_declaration() {
    let document = sample_ebook().to_rdf_string().unwrap();
    assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rdf:RDF"));
}

#[test]
fn envelope_declares_the_full_namespace_set() {
    let document = sample_ebook().to_rdf_string().unwrap();
    for declaration in [
        r#"xml:base="http://www.gutenberg.org/""#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/""#,
        r#"xmlns:pgterms="http://www.gutenberg.org/2009/pgterms/""#,
        r#"xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#""#,
        r#"xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#""#,
        r#"xmlns:cc="http://web.resource.org/cc/""#,
        r#"xmlns:dcam="http://purl.org/dc/dcam/""#,
        r#"xmlns:marcrel="http://id.loc.gov/vocabulary/relators/""#,
    ] {
        assert!(document.contains(declaration), "missing {declaration}");
    }
}

#[test]
fn scalar_fields_are_written_with_their_datatypes() {
    let document = sample_ebook().to_rdf_string().unwrap();
    assert!(document.contains(r#"<pgterms:ebook rdf:about="ebooks/999991234">"#));
    assert!(document.contains("<dcterms:title>Great Expectations</dcterms:title>"));
    assert!(document.contains("<pgterms:marc906>1861</pgterms:marc906>"));
    assert!(document.contains(
        r#"<dcterms:issued rdf:datatype="http://www.w3.org/2001/XMLSchema#date">1998-07-01</dcterms:issued>"#
    ));
    assert!(document.contains(
        r#"<pgterms:downloads rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">16579</pgterms:downloads>"#
    ));
    assert!(document.contains(r#"<dcterms:license rdf:resource="license"/>"#));
    assert!(document.contains("<pgterms:marc907>GB</pgterms:marc907>"));
    assert!(document.contains("<pgterms:marc546>Uses 19th century spelling.</pgterms:marc546>"));
    assert!(document.contains(
        "<pgterms:marc901>file:///files/999991234/999991234-h/images/cover.jpg</pgterms:marc901>"
    ));
}

#[test]
fn author_agent_block_is_complete() {
    let document = sample_ebook().to_rdf_string().unwrap();
    assert!(document.contains(r#"<pgterms:agent rdf:about="2009/agents/37">"#));
    assert!(document.contains("<pgterms:name>Dickens, Charles</pgterms:name>"));
    assert!(document.contains("<pgterms:alias>Boz</pgterms:alias>"));
    assert!(document.contains(
        r#"<pgterms:birthdate rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">1812</pgterms:birthdate>"#
    ));
    assert!(document.contains(
        r#"<pgterms:webpage rdf:resource="https://en.wikipedia.org/wiki/Charles_Dickens"/>"#
    ));
}

#[test]
fn translator_without_year_data_omits_the_year_elements() {
    let document = sample_ebook().to_rdf_string().unwrap();
    assert!(document.contains("<marcrel:trl>"));
    assert!(document.contains(r#"<pgterms:agent rdf:about="2009/agents/1736">"#));
    assert!(document.contains("<pgterms:name>Wyllie, David</pgterms:name>"));
    // only the author's years may appear
    assert_eq!(document.matches("<pgterms:birthdate").count(), 1);
    assert_eq!(document.matches("<pgterms:deathdate").count(), 1);
}

#[test]
fn profileless_creator_is_a_bare_reference() {
    let mut ebook = Ebook::default();
    ebook.add_creator(Creator {
        id: 12345,
        role: MarcRelator::Ill,
        ..Creator::default()
    });
    let document = ebook.to_rdf_string().unwrap();
    assert!(document.contains(r#"<marcrel:ill rdf:resource="2009/agents/12345"/>"#));
    assert!(!document.contains("<pgterms:agent"));
}

#[test]
fn blank_nodes_carry_fresh_identifiers() {
    let document = sample_ebook().to_rdf_string().unwrap();
    let node_id = Regex::new(r#"rdf:nodeID="N[0-9a-f]{32}""#).unwrap();
    // language, type, subject, bookshelf, one file format
    assert_eq!(node_id.find_iter(&document).count(), 5);
}

#[test]
fn unknown_type_is_written_as_an_empty_value() {
    let document = Ebook::default().to_rdf_string().unwrap();
    assert!(document.contains("<rdf:value/>"));
    assert!(
        document.contains(r#"<dcam:memberOf rdf:resource="http://purl.org/dc/terms/DCMIType"/>"#)
    );
}

#[test]
fn type_node_pairs_its_value_with_the_dcmi_scheme() {
    let document = sample_ebook().to_rdf_string().unwrap();
    assert!(document.contains("<rdf:value>Text</rdf:value>"));
    assert!(
        document.contains(r#"<dcam:memberOf rdf:resource="http://purl.org/dc/terms/DCMIType"/>"#)
    );
    // the type value carries no datatype attribute
    assert!(!document.contains(r#"rdf:datatype="http://purl.org/dc/terms/DCMIType""#));
}

#[test]
fn subject_and_bookshelf_nodes_reference_their_schemes() {
    let document = sample_ebook().to_rdf_string().unwrap();
    assert!(document.contains("<rdf:value>Orphans -- Fiction</rdf:value>"));
    assert!(document.contains(r#"<dcam:memberOf rdf:resource="http://purl.org/dc/terms/LCSH"/>"#));
    assert!(document.contains("<rdf:value>Best Books Ever Listings</rdf:value>"));
    assert!(document.contains(r#"<dcam:memberOf rdf:resource="2009/pgterms/Bookshelf"/>"#));
}

#[test]
fn file_block_points_back_to_the_record() {
    let document = sample_ebook().to_rdf_string().unwrap();
    assert!(document.contains(
        r#"<pgterms:file rdf:about="https://www.example.org/files/999991234/999991234-8.zip">"#
    ));
    assert!(document.contains(
        r#"<dcterms:extent rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">393579</dcterms:extent>"#
    ));
    assert!(document.contains(r#"<dcterms:isFormatOf rdf:resource="ebooks/999991234"/>"#));
    assert!(document.contains(
        r#"<rdf:value rdf:datatype="http://purl.org/dc/terms/IMT">application/zip</rdf:value>"#
    ));
    assert!(document.contains(r#"<dcam:memberOf rdf:resource="http://purl.org/dc/terms/IMT"/>"#));
}

#[test]
fn work_block_and_author_links_close_the_document() {
    let document = sample_ebook().to_rdf_string().unwrap();
    assert!(document.contains(
        r#"<rdf:Description rdf:about="https://en.wikipedia.org/wiki/Charles_Dickens">"#
    ));
    assert!(document.contains("<dcterms:description>en.wikipedia</dcterms:description>"));
    assert!(document.contains(r#"<cc:Work rdf:about="">"#));
    assert!(document.contains(
        r#"<cc:license rdf:resource="https://creativecommons.org/publicdomain/zero/1.0/"/>"#
    ));
    assert!(document.trim_end().ends_with("</rdf:RDF>"));
}

#[test]
fn multiple_titles_share_one_element() {
    let ebook = Ebook {
        titles: vec!["Main Title".to_string(), "Or, A Subtitle".to_string()],
        ..Ebook::default()
    };
    let document = ebook.to_rdf_string().unwrap();
    assert_eq!(document.matches("<dcterms:title>").count(), 1);
    assert!(document.contains("Main Title\nOr, A Subtitle"));
}
