//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Missing or malformed credentials
    Unauthorized(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ApiError::new("UNAUTHORIZED", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => {
                let message = e.to_string();
                match e {
                    RepositoryError::VenueNotFound(_) => {
                        (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message))
                    }
                    RepositoryError::Validation(_) => {
                        (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", message))
                    }
                    RepositoryError::Conflict(_) => {
                        (StatusCode::CONFLICT, ApiError::new("CONFLICT", message))
                    }
                    RepositoryError::Unauthorized(_) => {
                        (StatusCode::UNAUTHORIZED, ApiError::new("UNAUTHORIZED", message))
                    }
                    RepositoryError::Forbidden(_) => {
                        (StatusCode::FORBIDDEN, ApiError::new("FORBIDDEN", message))
                    }
                    RepositoryError::Configuration(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("CONFIGURATION_ERROR", message),
                    ),
                }
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_repository_error_status_mapping() {
        use crate::api::VenueId;

        let cases = [
            (
                RepositoryError::VenueNotFound(VenueId::new()),
                StatusCode::NOT_FOUND,
            ),
            (
                RepositoryError::Validation("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RepositoryError::Conflict("busy".into()),
                StatusCode::CONFLICT,
            ),
            (
                RepositoryError::Unauthorized("no token".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                RepositoryError::Forbidden("not yours".into()),
                StatusCode::FORBIDDEN,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(status_of(AppError::Repository(err)), expected);
        }
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            status_of(AppError::BadRequest("nope".into())),
            StatusCode::BAD_REQUEST
        );
    }
}
