//! Registry mapping metadata prefixes to wire-format parsers.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::HarvestError;
use crate::formats::{DublinCoreResponse, MarcXmlResponse, OaiResponse};
use crate::models::MetadataFormat;

/// Parser entry for one metadata format
#[derive(Debug, Clone, Copy)]
pub struct FormatHandler {
    format: MetadataFormat,
    parse_fn: fn(&[u8]) -> Result<Box<dyn OaiResponse>, HarvestError>,
}

impl FormatHandler {
    /// Wire format this handler produces
    pub fn format(&self) -> MetadataFormat {
        self.format
    }

    /// Parse a raw response body into a format-agnostic page
    pub fn parse(&self, body: &[u8]) -> Result<Box<dyn OaiResponse>, HarvestError> {
        (self.parse_fn)(body)
    }
}

/// Process-wide mapping from metadata prefix to parser.
///
/// Built once on first use and never mutated afterwards; callers only
/// look handlers up. Supporting a new format takes one parser module and
/// one entry here.
#[derive(Debug)]
pub struct FormatRegistry {
    handlers: HashMap<&'static str, FormatHandler>,
}

impl FormatRegistry {
    fn new() -> Self {
        let mut handlers = HashMap::new();
        handlers.insert(
            MetadataFormat::MarcXml.prefix(),
            FormatHandler {
                format: MetadataFormat::MarcXml,
                parse_fn: parse_marcxml,
            },
        );
        handlers.insert(
            MetadataFormat::OaiDc.prefix(),
            FormatHandler {
                format: MetadataFormat::OaiDc,
                parse_fn: parse_dublin_core,
            },
        );
        Self { handlers }
    }

    /// The shared registry instance
    pub fn global() -> &'static FormatRegistry {
        static REGISTRY: OnceLock<FormatRegistry> = OnceLock::new();
        REGISTRY.get_or_init(FormatRegistry::new)
    }

    /// Look up the handler for a metadata prefix
    pub fn get(&self, prefix: &str) -> Option<&FormatHandler> {
        self.handlers.get(prefix)
    }

    /// Look up a handler, failing with `UnsupportedFormat` if missing
    pub fn get_required(&self, prefix: &str) -> Result<&FormatHandler, HarvestError> {
        self.get(prefix)
            .ok_or_else(|| HarvestError::UnsupportedFormat(prefix.to_string()))
    }

    /// Whether a prefix is registered
    pub fn has(&self, prefix: &str) -> bool {
        self.handlers.contains_key(prefix)
    }

    /// Registered metadata prefixes
    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Number of registered formats
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

fn parse_marcxml(body: &[u8]) -> Result<Box<dyn OaiResponse>, HarvestError> {
    Ok(Box::new(MarcXmlResponse::from_xml(body)?))
}

fn parse_dublin_core(body: &[u8]) -> Result<Box<dyn OaiResponse>, HarvestError> {
    Ok(Box::new(DublinCoreResponse::from_xml(body)?))
}
