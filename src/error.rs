//! Error types for the portal library.

use thiserror::Error;

/// Result type alias for portal operations.
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors that can occur while routing navigation or fetching suggestions.
#[derive(Error, Debug)]
pub enum GateError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a response payload.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Background worker registration failed.
    #[error("Worker registration failed: {0}")]
    Worker(String),

    /// The runtime cannot register background workers.
    #[error("Background workers are not supported in this runtime")]
    WorkersUnsupported,

    /// An in-flight request was superseded and aborted.
    #[error("Request aborted")]
    Aborted,

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
