//! Error taxonomy for the snapshot pipeline.
//!
//! Transfer failures are typed so callers can report the HTTP status or the
//! curl cause distinctly; filesystem failures stay `std::io::Error` values
//! carried through `anyhow` with path context.

use thiserror::Error;

/// Error from the fetch stage: the URL never yielded a complete payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL failed to parse or uses a scheme other than http/https.
    #[error("invalid URL {0}")]
    Url(String),
    /// Curl-level failure: DNS, connect, TLS, or timeout.
    #[error("transfer failed: {0}")]
    Curl(#[from] curl::Error),
    /// The response completed with a non-success status.
    #[error("HTTP {0}")]
    Http(u32),
}
