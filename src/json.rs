//! JSON (de)serialization of the domain record.
//!
//! The JSON shape is the domain record itself under lower-snake-case keys:
//! scalar fields are always present, empty collections are omitted, and
//! unknown birth/death years are omitted. Missing keys deserialize to their
//! zero values, so the two directions compose.

use crate::ebook::Ebook;
use crate::error::Result;

/// Serializes a record to compact JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(ebook: &Ebook) -> Result<String> {
    Ok(serde_json::to_string(ebook)?)
}

/// Serializes a record to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty(ebook: &Ebook) -> Result<String> {
    Ok(serde_json::to_string_pretty(ebook)?)
}

/// Deserializes a record from JSON.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON for the record shape.
pub fn from_json(json: &str) -> Result<Ebook> {
    Ok(serde_json::from_str(json)?)
}
