//! OAI-PMH client and the harvest pagination loop.

use tracing::debug;
use url::Url;

use crate::error::{BoxError, HarvestError};
use crate::formats::{FormatHandler, FormatRegistry, OaiResponse};
use crate::models::DateRange;
use crate::utils::HttpClient;

/// Client for one OAI-PMH repository endpoint
#[derive(Debug, Clone)]
pub struct OaiClient {
    endpoint: String,
    http: HttpClient,
}

impl OaiClient {
    /// Create a client for the repository at `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Result<Self, HarvestError> {
        let endpoint = endpoint.into();
        Url::parse(&endpoint).map_err(|e| {
            HarvestError::InvalidRequest(format!("invalid endpoint URL '{}': {}", endpoint, e))
        })?;

        Ok(Self {
            endpoint,
            http: HttpClient::new()?,
        })
    }

    /// Create a client with a custom HTTP transport (for testing)
    pub fn with_http_client(endpoint: impl Into<String>, http: HttpClient) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Repository endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Harvest every page of a ListRecords listing.
    ///
    /// Pages are fetched strictly one at a time. `on_page` runs exactly
    /// once per successfully parsed page; returning an error stops the
    /// harvest and surfaces as [`HarvestError::Callback`]. The date range
    /// applies only to the request that opens the listing: as soon as the
    /// repository hands back a resumption token, the filter is considered
    /// embedded in the token and is not resent.
    ///
    /// Any transport, parse, or repository-reported error aborts the
    /// harvest; a page carrying a protocol error is never delivered to
    /// the callback.
    pub async fn harvest<F>(
        &self,
        metadata_prefix: &str,
        date_range: Option<&DateRange>,
        mut on_page: F,
    ) -> Result<(), HarvestError>
    where
        F: FnMut(&dyn OaiResponse) -> Result<(), BoxError>,
    {
        let handler = FormatRegistry::global().get_required(metadata_prefix)?;

        let mut token: Option<String> = None;
        let mut date_range = date_range;
        let mut page = 0usize;

        loop {
            let response = self
                .fetch_page(handler, metadata_prefix, token.as_deref(), date_range)
                .await?;
            page += 1;

            if let Some(error) = response.error() {
                debug!(code = %error.code, page, "repository reported a protocol error");
                return Err(HarvestError::Protocol {
                    code: error.code.clone(),
                    message: error.message.clone(),
                });
            }

            debug!(page, records = response.records().len(), "delivering page");
            on_page(response.as_ref()).map_err(HarvestError::Callback)?;

            match response.resumption_token() {
                Some(next) => {
                    token = Some(next.to_string());
                    // The filter is now embedded in the token.
                    date_range = None;
                }
                None => {
                    debug!(pages = page, "harvest complete");
                    return Ok(());
                }
            }
        }
    }

    async fn fetch_page(
        &self,
        handler: &FormatHandler,
        metadata_prefix: &str,
        token: Option<&str>,
        date_range: Option<&DateRange>,
    ) -> Result<Box<dyn OaiResponse>, HarvestError> {
        let url = self.list_records_url(Some(metadata_prefix), token, date_range)?;
        debug!(%url, "fetching page");

        let body = self.http.get_bytes(&url).await?;
        handler.parse(&body)
    }

    /// Build a ListRecords request URL.
    ///
    /// A resumption token is the only selection parameter allowed once it
    /// exists; otherwise the metadata prefix (plus optional date bounds)
    /// selects the listing. One of the two must be present.
    fn list_records_url(
        &self,
        metadata_prefix: Option<&str>,
        token: Option<&str>,
        date_range: Option<&DateRange>,
    ) -> Result<String, HarvestError> {
        let mut url = format!("{}?verb=ListRecords", self.endpoint);

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            url.push_str("&resumptionToken=");
            url.push_str(&urlencoding::encode(token));
        } else if let Some(prefix) = metadata_prefix.filter(|p| !p.is_empty()) {
            url.push_str("&metadataPrefix=");
            url.push_str(&urlencoding::encode(prefix));

            if let Some(range) = date_range {
                if let Some(from) = range.from.as_deref().filter(|v| !v.is_empty()) {
                    url.push_str("&from=");
                    url.push_str(&urlencoding::encode(from));
                }
                if let Some(until) = range.until.as_deref().filter(|v| !v.is_empty()) {
                    url.push_str("&until=");
                    url.push_str(&urlencoding::encode(until));
                }
            }
        } else {
            return Err(HarvestError::InvalidRequest(
                "either metadataPrefix or resumptionToken must be provided".to_string(),
            ));
        }

        Ok(url)
    }
}
