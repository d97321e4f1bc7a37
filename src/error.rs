//! Error types for RDF catalog operations.
//!
//! This module provides the [`RdfError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all RDF catalog library operations.
///
/// Data anomalies inside an otherwise well-formed record (non-numeric year
/// fields, missing optional sub-nodes, bare contributor references) are not
/// errors: decoding degrades them to zero or empty values. Only a document
/// that cannot be parsed at all, an IO failure, or a failed archive lookup
/// surfaces here.
#[derive(Error, Debug)]
pub enum RdfError {
    /// The input is not a well-formed RDF/XML document.
    #[error("Malformed RDF document: {0}")]
    MalformedDocument(String),

    /// The record could not be serialized to RDF/XML.
    #[error("Failed to generate RDF document: {0}")]
    Serialization(String),

    /// The requested eText was not found in the archive.
    #[error("eText ID {0} not found in archive")]
    NotFound(u32),

    /// Error during JSON (de)serialization of a record.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`RdfError`].
pub type Result<T> = std::result::Result<T, RdfError>;
