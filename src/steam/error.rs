use thiserror::Error;

/// Failure modes of a single store-search lookup.
///
/// Every variant fails exactly the one query that produced it; none of them
/// aborts the batch. Lookups are single-shot, so a transient `Network` error
/// surfaces as-is rather than being retried.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Transport-level failure: connect, TLS, or the request timeout.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// The body was not the expected search payload.
    #[error("malformed response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A well-formed response with an empty result list.
    #[error("no results found")]
    NotFound,
}
