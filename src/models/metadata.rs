//! Semantic metadata models shared across wire formats.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::HarvestError;

/// The wire format a record was harvested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataFormat {
    /// MARC bibliographic records serialized as MARCXML
    #[serde(rename = "marcxml")]
    MarcXml,
    /// Unqualified Dublin Core
    #[serde(rename = "oai_dc")]
    OaiDc,
}

impl MetadataFormat {
    /// Returns the `metadataPrefix` used on the wire
    pub fn prefix(&self) -> &'static str {
        match self {
            MetadataFormat::MarcXml => "marcxml",
            MetadataFormat::OaiDc => "oai_dc",
        }
    }
}

impl std::fmt::Display for MetadataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl std::str::FromStr for MetadataFormat {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "marcxml" => Ok(MetadataFormat::MarcXml),
            "oai_dc" => Ok(MetadataFormat::OaiDc),
            other => Err(HarvestError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Metadata extracted from a single record, discriminated by wire format.
///
/// This is a closed set: consumers pattern-match exhaustively instead of
/// probing with runtime downcasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordMetadata {
    /// Bibliographic projection of a MARCXML record
    Bibliographic(BibliographicMetadata),
    /// Deduplicated flat projection of a Dublin Core record
    FlatDescriptive(DublinCoreMetadata),
}

impl RecordMetadata {
    /// The wire format this metadata was extracted from
    pub fn format(&self) -> MetadataFormat {
        match self {
            RecordMetadata::Bibliographic(_) => MetadataFormat::MarcXml,
            RecordMetadata::FlatDescriptive(_) => MetadataFormat::OaiDc,
        }
    }
}

/// Bibliographic metadata extracted from a MARC record
///
/// Field comments give the source MARC tag (and subfield where it is not
/// `$a`). Absent source fields yield empty strings or empty vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibliographicMetadata {
    /// Control number (001)
    pub record_id: String,
    /// Date and time of latest transaction (005)
    pub last_modified: String,
    /// ISBN (020)
    pub isbn: String,
    /// Dewey classification (082)
    pub classification: String,
    /// Local call number (090), first two subfields joined
    pub call_number: String,
    /// Main entry personal name (100)
    pub main_author: String,
    /// Main entry corporate name (110)
    pub corporate_author: String,
    /// Main entry meeting name (111)
    pub meeting_name: String,
    /// Title (245$a)
    pub title: String,
    /// Remainder of title (245$b)
    pub subtitle: String,
    /// Statement of responsibility (245$c)
    pub responsibility: String,
    /// Edition statement (250)
    pub edition: String,
    /// Place of publication (260$a)
    pub publish_place: String,
    /// Publisher name (260$b)
    pub publisher: String,
    /// Date of publication (260$c)
    pub publish_year: String,
    /// Physical description (300), all subfields joined
    pub physical_desc: String,
    /// General notes (500)
    pub notes: Vec<String>,
    /// Bibliography note (504)
    pub bibliography: String,
    /// Topical subject headings (650)
    pub subjects: Vec<String>,
    /// Added entry personal names (700)
    pub authors: Vec<String>,
    /// Local holdings (990, then 999)
    pub holdings: Vec<String>,
    /// Electronic location (856$u)
    pub url: String,
}

/// Dublin Core metadata after per-element deduplication
///
/// Each element keeps its first-seen order with empty values and
/// duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DublinCoreMetadata {
    pub title: Vec<String>,
    pub creator: Vec<String>,
    pub subject: Vec<String>,
    pub description: Vec<String>,
    pub publisher: Vec<String>,
    pub contributor: Vec<String>,
    pub date: Vec<String>,
    pub r#type: Vec<String>,
    pub format: Vec<String>,
    pub identifier: Vec<String>,
    pub source: Vec<String>,
    pub language: Vec<String>,
    pub relation: Vec<String>,
    pub coverage: Vec<String>,
    pub rights: Vec<String>,
}

/// Inclusive datestamp bounds for selective harvesting.
///
/// Dates are UTC, formatted as `YYYY-MM-DD` or `YYYY-MM-DDThh:mm:ssZ`.
/// The range is only valid on the request that opens a listing; once a
/// resumption token exists the repository considers the filter embedded
/// in the token and it must not be resent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Lower bound (inclusive), if any
    pub from: Option<String>,
    /// Upper bound (inclusive), if any
    pub until: Option<String>,
}

impl DateRange {
    /// Range bounded on both sides
    pub fn between(from: impl Into<String>, until: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            until: Some(until.into()),
        }
    }

    /// Range bounded from below only
    pub fn since(from: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            until: None,
        }
    }

    /// Range bounded from above only
    pub fn up_to(until: impl Into<String>) -> Self {
        Self {
            from: None,
            until: Some(until.into()),
        }
    }

    /// Range between two calendar dates, formatted as `YYYY-MM-DD`
    pub fn between_dates(from: NaiveDate, until: NaiveDate) -> Self {
        Self::between(
            from.format("%Y-%m-%d").to_string(),
            until.format("%Y-%m-%d").to_string(),
        )
    }

    /// Whether neither bound is set
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.until.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prefix_roundtrip() {
        assert_eq!(MetadataFormat::MarcXml.prefix(), "marcxml");
        assert_eq!(MetadataFormat::OaiDc.prefix(), "oai_dc");
        assert_eq!("marcxml".parse::<MetadataFormat>().unwrap(), MetadataFormat::MarcXml);
        assert_eq!("oai_dc".parse::<MetadataFormat>().unwrap(), MetadataFormat::OaiDc);
    }

    #[test]
    fn test_format_parse_unknown() {
        let err = "mods".parse::<MetadataFormat>().unwrap_err();
        assert!(matches!(err, HarvestError::UnsupportedFormat(ref p) if p == "mods"));
    }

    #[test]
    fn test_record_metadata_discriminant() {
        let bib = RecordMetadata::Bibliographic(BibliographicMetadata::default());
        assert_eq!(bib.format(), MetadataFormat::MarcXml);

        let flat = RecordMetadata::FlatDescriptive(DublinCoreMetadata::default());
        assert_eq!(flat.format(), MetadataFormat::OaiDc);
    }

    #[test]
    fn test_date_range_constructors() {
        let range = DateRange::between("2023-01-01", "2023-12-31");
        assert_eq!(range.from.as_deref(), Some("2023-01-01"));
        assert_eq!(range.until.as_deref(), Some("2023-12-31"));

        let since = DateRange::since("2024-06-01");
        assert!(since.until.is_none());
        assert!(!since.is_empty());

        assert!(DateRange::default().is_empty());
    }

    #[test]
    fn test_date_range_from_calendar_dates() {
        let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let until = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let range = DateRange::between_dates(from, until);
        assert_eq!(range.from.as_deref(), Some("2023-01-01"));
        assert_eq!(range.until.as_deref(), Some("2023-12-31"));
    }

    #[test]
    fn test_bibliographic_metadata_serializes_with_stable_names() {
        let meta = BibliographicMetadata {
            record_id: "YOGYA000000000002408".to_string(),
            title: "Panduan cerdas".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["record_id"], "YOGYA000000000002408");
        assert_eq!(json["title"], "Panduan cerdas");
        assert_eq!(json["notes"], serde_json::json!([]));
    }
}
