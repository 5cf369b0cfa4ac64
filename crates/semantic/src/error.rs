use thiserror::Error;

/// Errors surfaced by embedders.
///
/// Inside the detection pipeline these are absorbed: a failed embedding
/// degrades one candidate to "no match" and is logged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// Configuration is inconsistent (e.g., api mode without a URL).
    #[error("invalid semantic config: {0}")]
    InvalidConfig(String),
    /// Transport failure or non-success HTTP status.
    #[error("http request failed: {0}")]
    Http(String),
    /// The response could not be turned into an embedding vector.
    #[error("inference failure: {0}")]
    Inference(String),
}
