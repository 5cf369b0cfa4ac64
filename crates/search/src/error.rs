use thiserror::Error;

/// Failures inside a search client.
///
/// These never cross the [`SearchProvider`](crate::SearchProvider) boundary:
/// providers log them and return an empty result list instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The client could not be constructed from the given settings.
    #[error("invalid search config: {0}")]
    InvalidConfig(String),
    /// Transport-level failure (DNS, connect, timeout).
    #[error("search request failed: {0}")]
    Http(String),
    /// The provider answered with a non-success status.
    #[error("search provider returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body was not the expected JSON shape.
    #[error("invalid search response: {0}")]
    Decode(String),
}
