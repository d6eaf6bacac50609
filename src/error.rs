//! Error types for harvest operations.

/// Boxed error returned by per-page callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can abort a harvest.
///
/// Every variant is fatal to the current [`harvest`](crate::OaiClient::harvest)
/// call; the library performs no retries. Callers own any retry policy.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    /// Requested metadata prefix has no registered parser. Raised before
    /// any network activity.
    #[error("unsupported metadata format: {0}")]
    UnsupportedFormat(String),

    /// Request could not be constructed (bad endpoint, missing selection
    /// parameter). Raised before any network activity.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure or non-success HTTP status.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body does not conform to the OAI-PMH envelope.
    #[error("failed to parse OAI-PMH response: {0}")]
    Parse(String),

    /// Well-formed envelope carrying a repository-reported error, e.g.
    /// `noRecordsMatch` or `badResumptionToken`. Code and message are
    /// preserved verbatim.
    #[error("OAI-PMH error [{code}]: {message}")]
    Protocol { code: String, message: String },

    /// The caller's per-page callback returned an error.
    #[error("callback error: {0}")]
    Callback(#[source] BoxError),
}

impl From<reqwest::Error> for HarvestError {
    fn from(err: reqwest::Error) -> Self {
        HarvestError::Transport(err.to_string())
    }
}

impl From<quick_xml::DeError> for HarvestError {
    fn from(err: quick_xml::DeError) -> Self {
        HarvestError::Parse(format!("XML: {}", err))
    }
}
