#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # gutenrdf
//!
//! A Rust library for reading, writing, and manipulating Project Gutenberg
//! RDF catalog records.
//!
//! ## Quick Start
//!
//! ### Reading a record
//!
//! ```ignore
//! use std::fs::File;
//! use gutenrdf::Ebook;
//!
//! # fn main() -> Result<(), gutenrdf::RdfError> {
//! let file = File::open("cache/epub/11/pg11.rdf")?;
//! let ebook = Ebook::from_rdf(file)?;
//!
//! println!("#{}: {}", ebook.id, ebook.titles[0]);
//! for creator in &ebook.creators {
//!     println!("  {} ({})", creator.name, creator.role.label());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Modifying and writing a record
//!
//! ```ignore
//! use std::fs::File;
//! use gutenrdf::Ebook;
//!
//! # fn main() -> Result<(), gutenrdf::RdfError> {
//! let mut ebook = Ebook::from_rdf(File::open("cache/epub/11/pg11.rdf")?)?;
//! ebook.add_bookshelf("Children's Literature", "2009/pgterms/Bookshelf");
//!
//! let mut out = File::create("pg11-updated.rdf")?;
//! ebook.to_rdf(&mut out)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ebook`] — The normalized catalog record (`Ebook`) and its value types
//! - [`relator`] — MARC relator codes for contributor roles
//! - [`rdf`] — The RDF/XML transformation engine
//! - [`json`] — JSON serialization/deserialization of records
//! - [`archive`] — Looking records up in local catalog copies
//! - [`error`] — Error types and result type
//!
//! ## Behavior notes
//!
//! - Decoding is tolerant: data anomalies inside a well-formed document
//!   (non-numeric identifiers, missing sub-nodes, unrecognized work types)
//!   degrade to zero or empty values instead of erroring.
//! - Encoding always produces the full namespace declaration set, the
//!   catalog's element order, and fresh blank-node identifiers.

pub mod archive;
pub mod ebook;
pub mod error;
pub mod json;
pub mod rdf;
pub mod relator;

pub use ebook::{AuthorLink, BookType, Bookshelf, Creator, Ebook, File, Language, Subject};
pub use error::{RdfError, Result};
pub use rdf::node_id::NodeIdGenerator;
pub use relator::MarcRelator;
