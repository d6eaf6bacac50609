//! Wire-format parsers and the format-agnostic response abstraction.
//!
//! This module defines the [`OaiResponse`] and [`OaiRecord`] traits that
//! every supported metadata format implements, the OAI-PMH envelope
//! pieces shared by all formats, and the [`FormatRegistry`] that maps a
//! `metadataPrefix` to its parser. Adding a new format means one parser
//! module plus one registry entry; the harvest loop never changes.

mod dublin_core;
mod marcxml;
mod registry;

pub use dublin_core::{DublinCore, DublinCoreResponse};
pub use marcxml::{ControlField, DataField, MarcRecord, MarcXmlResponse, Subfield};
pub use registry::{FormatHandler, FormatRegistry};

use serde::Deserialize;

use crate::models::{MetadataFormat, RecordMetadata};

/// One page of an OAI-PMH response, independent of metadata format.
pub trait OaiResponse: Send + Sync + std::fmt::Debug {
    /// Records on this page, in document order.
    ///
    /// Empty when the page carries a protocol error, even if some record
    /// XML was parsed.
    fn records(&self) -> Vec<&dyn OaiRecord>;

    /// Resumption token for the next page; `None` on the final page.
    fn resumption_token(&self) -> Option<&str>;

    /// Whether the repository reported a protocol-level error.
    fn has_error(&self) -> bool;

    /// The protocol-level error, if any.
    fn error(&self) -> Option<&OaiError>;
}

/// A single harvested record, independent of metadata format.
pub trait OaiRecord: Send + Sync + std::fmt::Debug {
    /// Project the raw payload into semantic metadata.
    ///
    /// Never fails; absent source fields yield empty values.
    fn extract_metadata(&self) -> RecordMetadata;

    /// Wire format of this record. Callers match on this to recover the
    /// concrete [`RecordMetadata`] variant.
    fn format(&self) -> MetadataFormat;
}

/// Repository-reported OAI-PMH error, e.g. `noRecordsMatch`.
///
/// Distinct from a transport failure: the HTTP exchange succeeded but the
/// repository rejected the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OaiError {
    /// Protocol error code
    #[serde(rename = "@code", default)]
    pub code: String,
    /// Free-text message
    #[serde(rename = "$text", default)]
    pub message: String,
}

/// Echo of the request that produced a response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestEcho {
    #[serde(rename = "@verb", default)]
    pub verb: String,
    #[serde(rename = "@metadataPrefix", default)]
    pub metadata_prefix: String,
    #[serde(rename = "@resumptionToken", default)]
    pub resumption_token: String,
    /// Repository base URL (element text)
    #[serde(rename = "$text", default)]
    pub base_url: String,
}

/// Pagination token element with completeness/cursor attributes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumptionToken {
    /// Opaque token; empty on the last page of a complete list
    #[serde(rename = "$text", default)]
    pub token: String,
    #[serde(rename = "@completeListSize")]
    pub complete_list_size: Option<u64>,
    #[serde(rename = "@cursor")]
    pub cursor: Option<u64>,
    #[serde(rename = "@expirationDate")]
    pub expiration_date: Option<String>,
}

/// Record header common to every metadata format
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordHeader {
    /// Set to `"deleted"` for records the repository removed
    #[serde(rename = "@status")]
    pub status: Option<String>,
    /// Stable record identifier
    #[serde(default)]
    pub identifier: String,
    /// Last-modified timestamp
    #[serde(default)]
    pub datestamp: String,
    /// Set memberships
    #[serde(rename = "setSpec", default)]
    pub set_spec: Vec<String>,
}

/// Headers-only listing returned by the ListIdentifiers verb
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListIdentifiers {
    #[serde(rename = "header", default)]
    pub headers: Vec<RecordHeader>,
    #[serde(rename = "resumptionToken")]
    pub resumption_token: Option<ResumptionToken>,
}
