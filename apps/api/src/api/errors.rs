use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::api::headers::FAILURE_HEADER;
use crate::domain::repositories::RepositoryError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Echo the message in a `Failure` header
    pub failure_header: bool,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            failure_header: false,
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 400 Bad Request error carrying a `Failure` header
    ///
    /// Used for client precondition violations clients are expected to
    /// surface directly.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            failure_header: true,
            ..Self::bad_request(message)
        }
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let failure = self
            .failure_header
            .then(|| HeaderValue::try_from(self.message.as_str()).ok())
            .flatten();

        let body = Json(json!({
            "error": self.message
        }));

        let mut response = (self.status, body).into_response();
        if let Some(value) = failure {
            response.headers_mut().insert(FAILURE_HEADER, value);
        }

        response
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        tracing::error!(error = %err, "Storage failure");
        Self::internal_server_error("An internal error occurred")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_has_no_failure_header() {
        let response = ApiError::bad_request("Title cannot be empty").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(FAILURE_HEADER).is_none());
    }

    #[test]
    fn failure_sets_header() {
        let response = ApiError::failure("A new jobOffer cannot already have an ID").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(FAILURE_HEADER).unwrap(),
            "A new jobOffer cannot already have an ID"
        );
    }

    #[test]
    fn repository_errors_become_internal_errors() {
        let err = ApiError::from(RepositoryError::Database(sqlx::Error::PoolTimedOut));

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("pool"));
    }
}
