//! API error type and the error → status-code mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use waypoint_core::error::CoreError;

use crate::clients::CollaboratorError;

pub type ApiResult<T> = Result<T, ApiError>;

/// API error with HTTP status code, stable error code, and a
/// human-readable message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn unauthenticated() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            code: "UNAUTHENTICATED",
            message: "a valid bearer token is required".into(),
        }
    }

    pub fn not_found(entity: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: format!("{entity} not found"),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "INVALID_INPUT",
            message: message.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let (status, code) = match &err {
            CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            CoreError::AlreadyExists { .. } => (StatusCode::CONFLICT, "CONFLICT"),
            CoreError::AuthenticationFailed { .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED")
            }
            CoreError::AuthorizationDenied { .. } => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            CoreError::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_INPUT"),
            CoreError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_FAILED"),
            CoreError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };
        Self {
            status,
            code,
            message: err.to_string(),
        }
    }
}

impl From<CollaboratorError> for ApiError {
    fn from(err: CollaboratorError) -> Self {
        // The store has not been touched when a collaborator fails; the
        // caller may simply retry.
        Self {
            status: StatusCode::BAD_GATEWAY,
            code: "UPSTREAM_FAILED",
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "code": self.code,
                "message": self.message,
                "status": self.status.as_u16(),
            }
        });
        (self.status, Json(body)).into_response()
    }
}
