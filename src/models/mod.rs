//! Core data models for harvested metadata.

mod metadata;

pub use metadata::{
    BibliographicMetadata, DateRange, DublinCoreMetadata, MetadataFormat, RecordMetadata,
};
