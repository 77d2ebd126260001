use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The data source could not be reached or rejected the query.
    #[error("failed to fetch {what}")]
    Fetch {
        what: &'static str,
        #[source]
        source: RepositoryError,
    },
    /// The data source answered with a body of the wrong shape.
    #[error("invalid response format from server")]
    InvalidResponse(String),
    /// The caller supplied unusable input.
    #[error("invalid input: {0}")]
    Form(String),
}

impl ServiceError {
    /// Classify a repository failure raised while fetching `what`.
    pub fn from_repository(what: &'static str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidResponse(details) => ServiceError::InvalidResponse(details),
            source => ServiceError::Fetch { what, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn invalid_response_is_kept_distinct() {
        let err = ServiceError::from_repository(
            "categories",
            RepositoryError::InvalidResponse("missing field".to_string()),
        );

        assert!(matches!(err, ServiceError::InvalidResponse(_)));
        assert_eq!(err.to_string(), "invalid response format from server");
    }

    #[test]
    fn transport_failures_name_the_resource() {
        let err = ServiceError::from_repository(
            "product price",
            RepositoryError::Status(StatusCode::SERVICE_UNAVAILABLE),
        );

        assert!(matches!(err, ServiceError::Fetch { .. }));
        assert_eq!(err.to_string(), "failed to fetch product price");
    }
}
