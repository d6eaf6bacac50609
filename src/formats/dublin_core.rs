//! Dublin Core wire format: envelope parsing and deduplicated projection.

use serde::Deserialize;

use crate::error::HarvestError;
use crate::formats::{
    ListIdentifiers, OaiError, OaiRecord, OaiResponse, RecordHeader, RequestEcho, ResumptionToken,
};
use crate::models::{DublinCoreMetadata, MetadataFormat, RecordMetadata};
use crate::utils::dedup_strings;

/// Parsed OAI-PMH envelope carrying Dublin Core records
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DublinCoreResponse {
    #[serde(rename = "responseDate", default)]
    pub response_date: String,
    #[serde(rename = "request", default)]
    pub request: RequestEcho,
    #[serde(rename = "ListRecords")]
    pub list_records: Option<DcListRecords>,
    #[serde(rename = "GetRecord")]
    pub get_record: Option<DcGetRecord>,
    #[serde(rename = "ListIdentifiers")]
    pub list_identifiers: Option<ListIdentifiers>,
    #[serde(rename = "error")]
    pub error: Option<OaiError>,
}

/// Record list from the ListRecords verb
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DcListRecords {
    #[serde(rename = "record", default)]
    pub records: Vec<DcEnvelopeRecord>,
    #[serde(rename = "resumptionToken")]
    pub resumption_token: Option<ResumptionToken>,
}

/// Single record from the GetRecord verb
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DcGetRecord {
    #[serde(rename = "record", default)]
    pub record: DcEnvelopeRecord,
}

/// Envelope record: header plus optional Dublin Core payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DcEnvelopeRecord {
    #[serde(default)]
    pub header: RecordHeader,
    #[serde(default)]
    pub metadata: DcMetadata,
}

/// Metadata wrapper around the `oai_dc:dc` element
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DcMetadata {
    #[serde(rename = "oai_dc:dc", alias = "dc", default)]
    pub dc: Option<DublinCore>,
}

/// Raw Dublin Core payload: fifteen repeatable descriptive elements.
///
/// Encounter order is preserved; values are not cleaned here. Element
/// names are matched with and without the conventional `dc:` prefix.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DublinCore {
    #[serde(rename = "dc:title", alias = "title", default)]
    pub title: Vec<String>,
    #[serde(rename = "dc:creator", alias = "creator", default)]
    pub creator: Vec<String>,
    #[serde(rename = "dc:subject", alias = "subject", default)]
    pub subject: Vec<String>,
    #[serde(rename = "dc:description", alias = "description", default)]
    pub description: Vec<String>,
    #[serde(rename = "dc:publisher", alias = "publisher", default)]
    pub publisher: Vec<String>,
    #[serde(rename = "dc:contributor", alias = "contributor", default)]
    pub contributor: Vec<String>,
    #[serde(rename = "dc:date", alias = "date", default)]
    pub date: Vec<String>,
    #[serde(rename = "dc:type", alias = "type", default)]
    pub r#type: Vec<String>,
    #[serde(rename = "dc:format", alias = "format", default)]
    pub format: Vec<String>,
    #[serde(rename = "dc:identifier", alias = "identifier", default)]
    pub identifier: Vec<String>,
    #[serde(rename = "dc:source", alias = "source", default)]
    pub source: Vec<String>,
    #[serde(rename = "dc:language", alias = "language", default)]
    pub language: Vec<String>,
    #[serde(rename = "dc:relation", alias = "relation", default)]
    pub relation: Vec<String>,
    #[serde(rename = "dc:coverage", alias = "coverage", default)]
    pub coverage: Vec<String>,
    #[serde(rename = "dc:rights", alias = "rights", default)]
    pub rights: Vec<String>,
}

impl DublinCore {
    /// Project into flat metadata: per element, empty values dropped and
    /// duplicates removed, first-seen order kept.
    pub fn extract_dublin_core(&self) -> DublinCoreMetadata {
        DublinCoreMetadata {
            title: dedup_strings(&self.title),
            creator: dedup_strings(&self.creator),
            subject: dedup_strings(&self.subject),
            description: dedup_strings(&self.description),
            publisher: dedup_strings(&self.publisher),
            contributor: dedup_strings(&self.contributor),
            date: dedup_strings(&self.date),
            r#type: dedup_strings(&self.r#type),
            format: dedup_strings(&self.format),
            identifier: dedup_strings(&self.identifier),
            source: dedup_strings(&self.source),
            language: dedup_strings(&self.language),
            relation: dedup_strings(&self.relation),
            coverage: dedup_strings(&self.coverage),
            rights: dedup_strings(&self.rights),
        }
    }
}

impl DublinCoreResponse {
    /// Parse an OAI-PMH Dublin Core response body
    pub fn from_xml(body: &[u8]) -> Result<Self, HarvestError> {
        let text = std::str::from_utf8(body)
            .map_err(|e| HarvestError::Parse(format!("response body is not valid UTF-8: {}", e)))?;
        Ok(quick_xml::de::from_str(text)?)
    }

    /// Deduplicated projections of every record on this page
    pub fn extract_all(&self) -> Vec<DublinCoreMetadata> {
        self.dc_records()
            .into_iter()
            .map(DublinCore::extract_dublin_core)
            .collect()
    }

    /// DC payloads in document order; payload-less records are skipped,
    /// and an errored page yields nothing.
    fn dc_records(&self) -> Vec<&DublinCore> {
        if self.error.is_some() {
            return Vec::new();
        }

        let mut records = Vec::new();
        if let Some(list) = &self.list_records {
            records.extend(
                list.records
                    .iter()
                    .filter_map(|record| record.metadata.dc.as_ref()),
            );
        }
        if let Some(single) = &self.get_record {
            if let Some(dc) = single.record.metadata.dc.as_ref() {
                records.push(dc);
            }
        }
        records
    }
}

impl OaiResponse for DublinCoreResponse {
    fn records(&self) -> Vec<&dyn OaiRecord> {
        self.dc_records()
            .into_iter()
            .map(|record| record as &dyn OaiRecord)
            .collect()
    }

    fn resumption_token(&self) -> Option<&str> {
        self.list_records
            .as_ref()
            .and_then(|list| list.resumption_token.as_ref())
            .map(|token| token.token.as_str())
            .filter(|token| !token.is_empty())
    }

    fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn error(&self) -> Option<&OaiError> {
        self.error.as_ref()
    }
}

impl OaiRecord for DublinCore {
    fn extract_metadata(&self) -> RecordMetadata {
        RecordMetadata::FlatDescriptive(self.extract_dublin_core())
    }

    fn format(&self) -> MetadataFormat {
        MetadataFormat::OaiDc
    }
}
