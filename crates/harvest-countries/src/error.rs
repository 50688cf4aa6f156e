use thiserror::Error;

/// Errors returned by the REST Countries client.
#[derive(Debug, Error)]
pub enum CountriesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status other than 200. `body` is the response
    /// text, kept for diagnosis.
    #[error("API request failed: {status} - {body}")]
    Api { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response decoded, but was neither a country object nor a list.
    #[error("unexpected response shape for {context}: expected a JSON array, got {found}")]
    UnexpectedShape { context: String, found: &'static str },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
