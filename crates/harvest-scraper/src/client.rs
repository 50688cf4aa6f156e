//! HTTP client for item pages.

use std::time::Duration;

use async_trait::async_trait;
use harvest_core::Fetchable;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::ScraperError;

/// Fetches the raw HTML of an item page.
///
/// One GET per call, no retries. Anything but `200 OK` is a
/// [`ScraperError::Transport`]. The body is decoded using the charset from
/// `Content-Type`, falling back to UTF-8.
pub struct ItemPageClient {
    client: Client,
}

impl ItemPageClient {
    /// Creates an `ItemPageClient` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetchable for ItemPageClient {
    type Output = String;
    type Error = ScraperError;

    /// # Errors
    ///
    /// - [`ScraperError::Transport`] for any status other than 200.
    /// - [`ScraperError::Http`] on network or TLS failure.
    async fn fetch(&self, url: &Url) -> Result<String, ScraperError> {
        tracing::debug!(%url, "fetching item page");

        let response = self
            .client
            .get(url.clone())
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), "item page request failed");
            return Err(ScraperError::Transport {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
