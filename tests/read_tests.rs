//! Field-level decode assertions against the sample catalog record.

use std::fs::File;

use gutenrdf::{BookType, Ebook, MarcRelator};

fn sample_ebook() -> Ebook {
    let file = File::open("tests/data/pg999991234.rdf").expect("fixture should exist");
    Ebook::from_rdf(file).expect("fixture should decode")
}

#[test]
fn identity_and_titles() {
    let ebook = sample_ebook();
    assert_eq!(ebook.id, 999_991_234);
    assert_eq!(ebook.titles, ["Great Expectations"]);
}

#[test]
fn alternate_title_splits_on_the_embedded_line_break() {
    let ebook = sample_ebook();
    assert_eq!(
        ebook.alternate_titles,
        ["Alternate Title", "With a newline separation"]
    );
}

#[test]
fn publication_fields() {
    let ebook = sample_ebook();
    assert_eq!(ebook.publisher, "Project Gutenberg");
    assert_eq!(ebook.published_year, 1861);
    assert_eq!(ebook.release_date, "1998-07-01");
    assert_eq!(ebook.copyright, "Public domain in the USA.");
    assert_eq!(ebook.series, ["Dickens Best Of", "All the Year Round"]);
    assert_eq!(ebook.book_type, BookType::Text);
    assert_eq!(ebook.downloads, 16_579);
}

#[test]
fn language_with_dialect_and_note() {
    let ebook = sample_ebook();
    assert_eq!(ebook.languages.len(), 1);
    let language = &ebook.languages[0];
    assert_eq!(language.code, "en");
    assert_eq!(language.dialect.as_deref(), Some("GB"));
    assert_eq!(language.notes, ["Uses 19th century spelling."]);
}

#[test]
fn notes_and_cover_paths() {
    let ebook = sample_ebook();
    assert_eq!(ebook.notes, ["A description for this RDF"]);
    assert_eq!(ebook.book_covers, ["images/cover.jpg"]);
}

#[test]
fn author_profile() {
    let ebook = sample_ebook();
    let author = &ebook.creators[0];
    assert_eq!(author.id, 37);
    assert_eq!(author.name, "Dickens, Charles");
    assert_eq!(author.role, MarcRelator::Aut);
    assert_eq!(author.born, 1812);
    assert_eq!(author.died, 1870);
    assert_eq!(author.aliases.len(), 2);
    assert_eq!(author.aliases[1], "Boz");
    assert_eq!(
        author.web_pages,
        ["https://en.wikipedia.org/wiki/Charles_Dickens"]
    );
}

#[test]
fn creators_follow_author_then_role_order() {
    let ebook = sample_ebook();
    let roles: Vec<MarcRelator> = ebook.creators.iter().map(|c| c.role).collect();
    assert_eq!(
        roles,
        [
            MarcRelator::Aut,
            MarcRelator::Com,
            MarcRelator::Ctb,
            MarcRelator::Edt,
            MarcRelator::Ill,
            MarcRelator::Trl,
        ]
    );

    let names: Vec<&str> = ebook.creators.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Dickens, Charles",
            "Paz, M.",
            "Robert, Clémence",
            "Snell, F. J. (Frederick John)",
            "Leech, John",
            "Wyllie, David",
        ]
    );
}

#[test]
fn subjects() {
    let ebook = sample_ebook();
    assert_eq!(ebook.subjects.len(), 9);
    assert_eq!(ebook.subjects[7].heading, "Revenge -- Fiction");
    assert_eq!(ebook.subjects[7].schema, "http://purl.org/dc/terms/LCSH");
    assert_eq!(ebook.subjects[2].heading, "PR");
    assert_eq!(ebook.subjects[2].schema, "http://purl.org/dc/terms/LCC");
}

#[test]
fn file_resources() {
    let ebook = sample_ebook();
    assert_eq!(ebook.files.len(), 15);

    let file = &ebook.files[4];
    assert_eq!(
        file.url,
        "https://www.example.org/files/999991234/999991234-8.zip"
    );
    assert_eq!(file.extent, 393_579);
    assert_eq!(file.modified, "2015-11-06T09:50:04");
    assert_eq!(file.encodings.len(), 2);
    assert_eq!(
        file.encodings.get_index(1).map(String::as_str),
        Some("text/plain; charset=iso-8859-1")
    );
}

#[test]
fn bookshelves() {
    let ebook = sample_ebook();
    assert_eq!(ebook.bookshelves.len(), 1);
    assert_eq!(ebook.bookshelves[0].name, "Best Books Ever Listings");
    assert_eq!(ebook.bookshelves[0].resource, "2009/pgterms/Bookshelf");
}

#[test]
fn author_links_and_work_block() {
    let ebook = sample_ebook();
    assert_eq!(ebook.author_links.len(), 1);
    assert_eq!(
        ebook.author_links[0].url,
        "https://en.wikipedia.org/wiki/Charles_Dickens"
    );
    assert_eq!(ebook.author_links[0].description, "en.wikipedia");
    assert_eq!(
        ebook.cc_comment,
        "Archives containing the RDF files for *all* our books can be downloaded from our website."
    );
    assert_eq!(
        ebook.cc_license,
        "https://creativecommons.org/publicdomain/zero/1.0/"
    );
}
