//! HTTP client for the Reddit listing endpoint and image hosts
//!
//! Every request carries a fixed browser User-Agent; Reddit rejects or
//! throttles requests that look like bare scripts. No retries and no
//! timeout are configured: a request is sent once and reqwest's defaults
//! apply.

use std::path::Path;

use crate::error::{Result, ScrapeError};
use crate::url::DEFAULT_BASE_URL;

const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.8; rv:21.0) Gecko/20100101 Firefox/21.0";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the listing endpoint (default: "https://www.reddit.com")
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Requests a scrape run makes
///
/// Implemented by [`RedditClient`] for real traffic. The scraper loop is
/// generic over it so alternative transports can be plugged in.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Fetch the body of a listing page
    async fn fetch_listing(&self, url: &str) -> Result<String>;

    /// Download `url` into the file at `dest`, returning the bytes written
    async fn download(&self, url: &str, dest: &Path) -> Result<usize>;
}

/// HTTP client wrapper
///
/// Handles the two kinds of requests a run makes:
/// - Listing pages, where any failure is fatal
/// - Image downloads, where failures are reported per image
pub struct RedditClient {
    client: reqwest::Client,
    base_url: String,
}

impl RedditClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(ScrapeError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Scheme and host the listing URLs are built from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for RedditClient {
    /// Fetch the body of a listing page
    ///
    /// # Arguments
    /// * `url` - Full listing URL, including any `after` cursor
    ///
    /// # Errors
    /// - `HttpError` - Network failure before a response arrived
    /// - `ProtocolError` - Server answered with a non-success status
    async fn fetch_listing(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ScrapeError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::ProtocolError(format!(
                "listing request to {} returned HTTP {}",
                url, status
            )));
        }

        response.text().await.map_err(ScrapeError::HttpError)
    }

    /// Download `url` into the file at `dest`
    ///
    /// The file is only created once the whole body has been received, so a
    /// failed transfer leaves nothing behind at `dest`.
    ///
    /// # Returns
    /// Number of bytes written
    ///
    /// # Errors
    /// Returns `DownloadFailed` for transport errors, non-success statuses
    /// and filesystem errors alike
    async fn download(&self, url: &str, dest: &Path) -> Result<usize> {
        let failed = |reason: String| ScrapeError::DownloadFailed {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("HTTP {}", status)));
        }

        let bytes = response.bytes().await.map_err(|e| failed(e.to_string()))?;

        tokio::fs::write(dest, &bytes)
            .await
            .map_err(|e| failed(format!("could not write {}: {}", dest.display(), e)))?;

        Ok(bytes.len())
    }
}
