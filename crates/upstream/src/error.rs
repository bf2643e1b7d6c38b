use thiserror::Error;

/// Failure of a single upstream call.
///
/// Callers decide per endpoint whether a variant becomes a degraded success
/// (fallback payload) or a generic error response; upstream detail is only
/// ever logged, never forwarded to clients.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success HTTP status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The request never completed (connect, DNS, read failures).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response arrived but did not have the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Decode(String),
}
