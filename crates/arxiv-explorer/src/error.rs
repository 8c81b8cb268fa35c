//! Error types for the arXiv Explorer client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//!
//! Batch-level failures (transport, malformed feed) abort and surface here;
//! entry-level failures are absorbed inside the normalizer, which drops the
//! offending entry and keeps going.

/// Errors from Atom feed normalization.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    /// The response body was empty or whitespace-only.
    #[error("empty response body")]
    EmptyBody,

    /// The body could not be parsed as an Atom document.
    #[error("malformed Atom feed: {0}")]
    Malformed(String),
}

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Non-success HTTP status from the catalog
    #[error("Catalog returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The catalog response could not be normalized
    #[error("Failed to parse catalog response: {0}")]
    Feed(#[from] FeedError),
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Returns true if this error is worth retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status >= 500,
            Self::Http(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
