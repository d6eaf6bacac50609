//! Utility modules supporting harvest operations.
//!
//! - [`dedup_strings`]: order-preserving deduplication for repeatable
//!   metadata elements
//! - [`HttpClient`]: HTTP transport wrapper with sensible defaults

mod dedup;
mod http;

pub use dedup::dedup_strings;
pub use http::HttpClient;
