//! Error types for the dashboard API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use unravel_algos::AlgoError;
use unravel_hal::HalError;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid parameters: {0}")]
    BuildError(#[from] AlgoError),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    /// HTTP status and machine-readable kind.
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::BuildError(_) => (StatusCode::BAD_REQUEST, "build_error"),
            ApiError::BackendError(_) => (StatusCode::BAD_GATEWAY, "backend_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        self.classify().0
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.classify();

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<HalError> for ApiError {
    fn from(e: HalError) -> Self {
        match e {
            HalError::UnknownProvider(_)
            | HalError::UnknownBackend { .. }
            | HalError::InvalidShots(_) => ApiError::BadRequest(e.to_string()),
            _ => ApiError::BackendError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hal_errors_split_by_blame() {
        let unknown: ApiError = HalError::UnknownProvider("ibmq".into()).into();
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

        let failed: ApiError = HalError::JobFailed("boom".into()).into();
        assert_eq!(failed.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_build_errors_are_bad_requests() {
        let err: ApiError = AlgoError::EmptyCxPattern.into();
        assert_eq!(err.classify(), (StatusCode::BAD_REQUEST, "build_error"));
    }
}
