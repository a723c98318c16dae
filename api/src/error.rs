use thiserror::Error;

/// Failure of one client operation.
///
/// `Invalid` carries the user-facing message for input rejected before any
/// network call; the other variants are surfaced through a generic message
/// at the call site.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered outside the 2xx range.
    #[error("server returned status {0}")]
    Status(u16),

    /// The request never completed (connection, DNS, fetch failure).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The body did not match the endpoint's schema.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// Input rejected locally, before any network call.
    #[error("{0}")]
    Invalid(&'static str),
}
