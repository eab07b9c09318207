//! Catalog error types.

use thiserror::Error;

/// Failures talking to the remote catalog.
///
/// Every variant is a network error in the taxonomy of the data layer: the
/// client never retries, callers decide what to do.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the catalog.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The catalog returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a catalog response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The listing kept reporting a next page past the page limit.
    #[error("pagination did not terminate after {pages} pages")]
    Pagination {
        /// Number of pages fetched before giving up.
        pages: u32,
    },
}
