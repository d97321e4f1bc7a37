//! MARC relator codes for contributor roles.
//!
//! Every contributor to a work carries a role drawn from the Library of
//! Congress MARC relator vocabulary. The catalog vocabulary is irregular
//! about how roles appear on the wire: an author is recorded through the
//! `<dcterms:creator>` element while every other role uses a `<marcrel:*>`
//! element named after its three-letter code. That irregularity is confined
//! to the document models; here `aut` is an ordinary table entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A MARC relator code identifying a contributor's role.
///
/// This is the closed set of codes the catalog generator actually emits.
/// `clb` is deprecated upstream and `unk` is not an official relator code,
/// but both occur in the corpus and must round-trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarcRelator {
    /// Author (written as `dcterms:creator`, never `marcrel:aut`).
    #[default]
    Aut,
    /// Adapter
    Adp,
    /// Author of afterword, colophon, etc.
    Aft,
    /// Annotator
    Ann,
    /// Arranger
    Arr,
    /// Artist
    Art,
    /// Author of introduction, etc.
    Aui,
    /// Commentator
    Cmm,
    /// Composer
    Cmp,
    /// Conductor
    Cnd,
    /// Compiler
    Com,
    /// Contributor
    Ctb,
    /// Dubious author
    Dub,
    /// Editor
    Edt,
    /// Engraver
    Egr,
    /// Illustrator
    Ill,
    /// Librettist
    Lbt,
    /// Other
    Oth,
    /// Publisher
    Pbl,
    /// Photographer
    Pht,
    /// Performer
    Prf,
    /// Printer
    Prt,
    /// Researcher
    Res,
    /// Transcriber
    Trc,
    /// Translator
    Trl,
    /// Collaborator (deprecated upstream, kept for old records)
    Clb,
    /// Unknown (non-standard, present in a handful of records)
    Unk,
}

impl MarcRelator {
    /// All codes in the fixed order the catalog vocabulary lists the
    /// role-specific contributor elements. The author element block always
    /// precedes these.
    pub const ROLE_ELEMENT_ORDER: [MarcRelator; 26] = [
        MarcRelator::Adp,
        MarcRelator::Aft,
        MarcRelator::Ann,
        MarcRelator::Arr,
        MarcRelator::Art,
        MarcRelator::Aui,
        MarcRelator::Cmm,
        MarcRelator::Cmp,
        MarcRelator::Cnd,
        MarcRelator::Com,
        MarcRelator::Ctb,
        MarcRelator::Dub,
        MarcRelator::Edt,
        MarcRelator::Egr,
        MarcRelator::Ill,
        MarcRelator::Lbt,
        MarcRelator::Oth,
        MarcRelator::Pbl,
        MarcRelator::Pht,
        MarcRelator::Prf,
        MarcRelator::Prt,
        MarcRelator::Res,
        MarcRelator::Trc,
        MarcRelator::Trl,
        MarcRelator::Clb,
        MarcRelator::Unk,
    ];

    /// The three-letter relator code, e.g. `aut`, `edt`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Aut => "aut",
            Self::Adp => "adp",
            Self::Aft => "aft",
            Self::Ann => "ann",
            Self::Arr => "arr",
            Self::Art => "art",
            Self::Aui => "aui",
            Self::Cmm => "cmm",
            Self::Cmp => "cmp",
            Self::Cnd => "cnd",
            Self::Com => "com",
            Self::Ctb => "ctb",
            Self::Dub => "dub",
            Self::Edt => "edt",
            Self::Egr => "egr",
            Self::Ill => "ill",
            Self::Lbt => "lbt",
            Self::Oth => "oth",
            Self::Pbl => "pbl",
            Self::Pht => "pht",
            Self::Prf => "prf",
            Self::Prt => "prt",
            Self::Res => "res",
            Self::Trc => "trc",
            Self::Trl => "trl",
            Self::Clb => "clb",
            Self::Unk => "unk",
        }
    }

    /// Human-readable name from the LOC relator term list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aut => "Author",
            Self::Adp => "Adapter",
            Self::Aft => "Author of afterword, colophon, etc.",
            Self::Ann => "Annotator",
            Self::Arr => "Arranger",
            Self::Art => "Artist",
            Self::Aui => "Author of introduction, etc.",
            Self::Cmm => "Commentator",
            Self::Cmp => "Composer",
            Self::Cnd => "Conductor",
            Self::Com => "Compiler",
            Self::Ctb => "Contributor",
            Self::Dub => "Dubious author",
            Self::Edt => "Editor",
            Self::Egr => "Engraver",
            Self::Ill => "Illustrator",
            Self::Lbt => "Librettist",
            Self::Oth => "Other",
            Self::Pbl => "Publisher",
            Self::Pht => "Photographer",
            Self::Prf => "Performer",
            Self::Prt => "Printer",
            Self::Res => "Researcher",
            Self::Trc => "Transcriber",
            Self::Trl => "Translator",
            Self::Clb => "Collaborator",
            Self::Unk => "Unknown",
        }
    }

    /// Looks up a role by its three-letter code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "aut" => Some(Self::Aut),
            "adp" => Some(Self::Adp),
            "aft" => Some(Self::Aft),
            "ann" => Some(Self::Ann),
            "arr" => Some(Self::Arr),
            "art" => Some(Self::Art),
            "aui" => Some(Self::Aui),
            "cmm" => Some(Self::Cmm),
            "cmp" => Some(Self::Cmp),
            "cnd" => Some(Self::Cnd),
            "com" => Some(Self::Com),
            "ctb" => Some(Self::Ctb),
            "dub" => Some(Self::Dub),
            "edt" => Some(Self::Edt),
            "egr" => Some(Self::Egr),
            "ill" => Some(Self::Ill),
            "lbt" => Some(Self::Lbt),
            "oth" => Some(Self::Oth),
            "pbl" => Some(Self::Pbl),
            "pht" => Some(Self::Pht),
            "prf" => Some(Self::Prf),
            "prt" => Some(Self::Prt),
            "res" => Some(Self::Res),
            "trc" => Some(Self::Trc),
            "trl" => Some(Self::Trl),
            "clb" => Some(Self::Clb),
            "unk" => Some(Self::Unk),
            _ => None,
        }
    }
}

impl fmt::Display for MarcRelator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_and_lookup_are_consistent() {
        for role in MarcRelator::ROLE_ELEMENT_ORDER {
            assert_eq!(MarcRelator::from_code(role.code()), Some(role));
        }
        assert_eq!(MarcRelator::from_code("aut"), Some(MarcRelator::Aut));
        assert_eq!(MarcRelator::from_code("xyz"), None);
    }

    #[test]
    fn author_is_not_in_the_role_element_block() {
        assert!(!MarcRelator::ROLE_ELEMENT_ORDER.contains(&MarcRelator::Aut));
    }

    #[test]
    fn labels_match_loc_terms() {
        assert_eq!(MarcRelator::Aut.label(), "Author");
        assert_eq!(MarcRelator::Ill.label(), "Illustrator");
        assert_eq!(MarcRelator::Trl.label(), "Translator");
    }

    #[test]
    fn display_prints_the_code() {
        assert_eq!(MarcRelator::Edt.to_string(), "edt");
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&MarcRelator::Ctb).unwrap();
        assert_eq!(json, "\"ctb\"");
        let role: MarcRelator = serde_json::from_str("\"ill\"").unwrap();
        assert_eq!(role, MarcRelator::Ill);
    }
}
