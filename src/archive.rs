//! Looking records up in local copies of the catalog.
//!
//! The catalog distributes all records as one tar archive whose entries
//! follow the layout `cache/epub/<id>/pg<id>.rdf`; an unpacked copy keeps
//! the same layout on disk. Both lookups report a missing record as
//! [`RdfError::NotFound`].

use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tar::Archive;

use crate::ebook::Ebook;
use crate::error::{RdfError, Result};

/// Relative path of one record inside the archive layout.
#[must_use]
pub fn record_path(id: u32) -> String {
    format!("cache/epub/{id}/pg{id}.rdf")
}

/// Reads and decodes the record for `id` from an unpacked archive rooted
/// at `base`.
///
/// # Errors
///
/// [`RdfError::NotFound`] when the record file does not exist; otherwise
/// IO or decode errors from reading it.
pub fn from_directory(base: impl AsRef<Path>, id: u32) -> Result<Ebook> {
    let path = base.as_ref().join(record_path(id));
    let file = fs::File::open(&path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => RdfError::NotFound(id),
        _ => RdfError::IoError(err),
    })?;
    Ebook::from_rdf(file)
}

/// Scans a tar stream for the record entry of `id` and decodes it.
///
/// The stream is consumed up to the matching entry; the caller provides a
/// fresh reader per lookup.
///
/// # Errors
///
/// [`RdfError::NotFound`] when no entry matches; otherwise IO or decode
/// errors from the stream.
pub fn from_tar<R: Read>(reader: R, id: u32) -> Result<Ebook> {
    let wanted = record_path(id);
    let mut archive = Archive::new(reader);
    for entry in archive.entries()? {
        let entry = entry?;
        if entry.path()? == Path::new(&wanted) {
            return Ebook::from_rdf(entry);
        }
    }
    Err(RdfError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_paths_follow_the_archive_layout() {
        assert_eq!(record_path(11), "cache/epub/11/pg11.rdf");
        assert_eq!(
            record_path(999_991_234),
            "cache/epub/999991234/pg999991234.rdf"
        );
    }
}
