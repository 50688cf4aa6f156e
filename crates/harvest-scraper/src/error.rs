use harvest_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The item page answered with anything other than `200 OK`.
    #[error("request to {url} failed with status code {status}")]
    Transport { status: u16, url: String },

    /// The body could not be turned into a document, or a selector did not
    /// compile.
    #[error("failed to parse HTML from {context}: {reason}")]
    Parse { context: String, reason: String },

    /// A scraped value failed construction of a validated type.
    #[error(transparent)]
    Validation(#[from] CoreError),
}
