//! Error types for the Kandilli feed service.

use thiserror::Error;

/// Result type alias for Kandilli feed operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Kandilli feed service.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport errors talking to the observatory
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success responses from the observatory
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Document extraction errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
