//! Error types for resume-view-core

use thiserror::Error;

/// Main error type for resume-view operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("malformed resume payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error came from decoding the response body rather than
    /// from the transport or the server.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, Error::MalformedPayload(_))
    }
}

/// Result type alias for resume-view operations
pub type Result<T> = std::result::Result<T, Error>;
