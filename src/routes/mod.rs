use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;
pub mod prices;

/// JSON body returned alongside non-success statuses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Map a service failure to a response: bad input is the caller's fault,
/// everything else is an upstream failure.
pub fn service_error_response(action: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => HttpResponse::BadRequest().json(ErrorBody::new(message)),
        err => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::BadGateway().json(ErrorBody::new(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use reqwest::StatusCode as UpstreamStatus;

    use super::*;
    use crate::repository::errors::RepositoryError;

    async fn error_message(resp: HttpResponse) -> String {
        let bytes = to_bytes(resp.into_body()).await.expect("read body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        body["error"].as_str().unwrap_or_default().to_string()
    }

    #[actix_web::test]
    async fn form_errors_are_bad_requests() {
        let resp = service_error_response(
            "calculate customer price",
            ServiceError::Form("customer_id cannot be empty".to_string()),
        );

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, "customer_id cannot be empty");
    }

    #[actix_web::test]
    async fn fetch_errors_are_bad_gateway() {
        let resp = service_error_response(
            "list categories",
            ServiceError::Fetch {
                what: "categories",
                source: RepositoryError::Status(UpstreamStatus::INTERNAL_SERVER_ERROR),
            },
        );

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(error_message(resp).await, "failed to fetch categories");
    }

    #[actix_web::test]
    async fn invalid_responses_are_bad_gateway() {
        let resp = service_error_response(
            "list categories",
            ServiceError::InvalidResponse("expected array".to_string()),
        );

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            error_message(resp).await,
            "invalid response format from server"
        );
    }
}
