//! End-to-end item scrape: validate the URL, fetch once, parse, assemble.

use harvest_core::{EbayItem, Fetchable, ValidUrl};

use crate::assemble::{parse_document, RecordAssembler};
use crate::client::ItemPageClient;
use crate::error::ScraperError;

/// Scrapes single eBay item pages.
///
/// Generic over the transport so tests and alternative clients can stand in
/// for [`ItemPageClient`].
pub struct EbayScraper<F = ItemPageClient> {
    fetcher: F,
    assembler: RecordAssembler,
}

impl EbayScraper<ItemPageClient> {
    /// Builds a scraper backed by a fresh [`ItemPageClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        Self::with_fetcher(ItemPageClient::new(timeout_secs, user_agent)?)
    }
}

impl<F> EbayScraper<F>
where
    F: Fetchable<Output = String, Error = ScraperError> + Sync,
{
    /// # Errors
    ///
    /// Returns [`ScraperError::Parse`] if the item schema fails to compile.
    pub fn with_fetcher(fetcher: F) -> Result<Self, ScraperError> {
        Ok(Self {
            fetcher,
            assembler: RecordAssembler::new()?,
        })
    }

    /// Fetches `url` and returns the validated item.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Validation`] if `url` itself is invalid (checked
    ///   before any request), or a scraped image URL or price is invalid.
    /// - [`ScraperError::Transport`] for a non-200 response.
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::Parse`] if the body is not a usable document.
    pub async fn get_item(&self, url: &str) -> Result<EbayItem, ScraperError> {
        let url = ValidUrl::parse(url)?;
        let body = self.fetcher.fetch(url.as_url()).await?;
        let item = self.assemble_body(&body, &url)?;
        tracing::info!(%url, title = item.title().unwrap_or("<none>"), "scraped item");
        Ok(item)
    }

    /// Parses and assembles an already-fetched body. The document never
    /// outlives this call.
    fn assemble_body(&self, body: &str, url: &ValidUrl) -> Result<EbayItem, ScraperError> {
        let doc = parse_document(body, url.as_str())?;
        self.assembler.assemble(&doc, url)
    }
}
