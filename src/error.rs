//! Folio error types

use thiserror::Error;

/// Failures raised while fetching or decoding site data
#[derive(Error, Debug)]
pub enum FolioError {
    /// Transport failure (DNS, connect, TLS, timeout, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP error {status}: {url}")]
    Http {
        /// HTTP status code (e.g., 403, 500)
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Body could not be decoded into the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Article slug is missing from the index, or its body returned 404
    #[error("Article not found: {0}")]
    NotFound(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Parse(err.to_string())
    }
}

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;
