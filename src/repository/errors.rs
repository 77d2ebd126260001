use reqwest::StatusCode;
use thiserror::Error;

/// Result type returned by the GraphQL-backed repository.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures raised while talking to the GraphQL data source.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The request never produced a response (unreachable host, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),
    /// The endpoint answered with a GraphQL `errors` list.
    #[error("query failed: {0}")]
    Query(String),
    /// The response body did not match the expected shape.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(value: serde_json::Error) -> Self {
        RepositoryError::InvalidResponse(value.to_string())
    }
}
