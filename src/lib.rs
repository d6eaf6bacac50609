//! # oai-harvest
//!
//! Client library for harvesting OAI-PMH repositories.
//!
//! The crate drives paginated `ListRecords` requests against a repository
//! endpoint, exposes each page through a format-agnostic abstraction, and
//! projects record payloads into semantic metadata structs.
//!
//! Two metadata formats are supported out of the box:
//!
//! - `marcxml` - MARC bibliographic records, projected into
//!   [`BibliographicMetadata`]
//! - `oai_dc` - Dublin Core records, projected into
//!   [`DublinCoreMetadata`] with per-element deduplication
//!
//! ## Architecture
//!
//! - [`client`]: the [`OaiClient`] and its serial pagination loop
//! - [`formats`]: wire-format parsers behind the [`OaiResponse`] and
//!   [`OaiRecord`] traits, plus the prefix-to-parser [`FormatRegistry`]
//! - [`models`]: extracted metadata types and the [`DateRange`] filter
//! - [`utils`]: HTTP transport wrapper and deduplication helpers
//!
//! ## Example
//!
//! ```rust,no_run
//! use oai_harvest::{OaiClient, RecordMetadata};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OaiClient::new("https://opac.example.org/oai")?;
//!
//! client
//!     .harvest("marcxml", None, |page| {
//!         for record in page.records() {
//!             match record.extract_metadata() {
//!                 RecordMetadata::Bibliographic(book) => {
//!                     println!("{} by {}", book.title, book.main_author);
//!                 }
//!                 RecordMetadata::FlatDescriptive(dc) => {
//!                     println!("{:?}", dc.title);
//!                 }
//!             }
//!         }
//!         Ok(())
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod formats;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use client::OaiClient;
pub use error::{BoxError, HarvestError};
pub use formats::{FormatRegistry, OaiError, OaiRecord, OaiResponse};
pub use models::{
    BibliographicMetadata, DateRange, DublinCoreMetadata, MetadataFormat, RecordMetadata,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
