//! HTTP client utilities.

use reqwest::Client;
use std::time::Duration;

use crate::error::HarvestError;

/// Shared HTTP client with sensible defaults
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, HarvestError> {
        Self::with_user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
    }

    /// Create a new HTTP client with a custom user agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, HarvestError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client })
    }

    /// Create from an existing reqwest Client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// GET a URL and return the raw response body.
    ///
    /// A non-success status code is a transport failure; no retries.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HarvestError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HarvestError::Transport(format!("failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Transport(format!(
                "unexpected status code: {}",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HarvestError::Transport(format!("failed to read response body: {}", e)))?;

        Ok(body.to_vec())
    }
}
