//! Error types for deployment lookups.

use thiserror::Error;

/// Top-level error type for lookup operations.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Required configuration is missing or ill-formed. Raised before any
    /// network call is issued.
    #[error("configuration error: {0}")]
    Config(String),

    /// A GitHub endpoint answered with a non-success status.
    #[error("fetching {url} failed with status {status}: {body}")]
    Fetch {
        /// The requested URL.
        url: String,
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response body, as returned by the server.
        body: String,
    },

    /// The underlying transport failed, or the response body could not be
    /// decoded.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The lookup was cancelled by the caller before it completed.
    #[error("lookup cancelled")]
    Cancelled,
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
