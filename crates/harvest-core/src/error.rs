use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing or persisting validated values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The input has no scheme, no network location, or does not parse at all.
    #[error("invalid URL \"{input}\": {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("invalid price: {0} is negative")]
    InvalidPrice(i128),

    /// A string price that is not an integer.
    #[error("cannot convert \"{input}\" to an integer")]
    Conversion { input: String },

    /// `persist` was called without a path on a record that cannot name itself.
    #[error("no output path given and the record has no title to derive a file name from")]
    MissingFileName,

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
