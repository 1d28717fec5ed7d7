use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::error::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "Conflict", msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DatabaseError", msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::TitleRequired
            | DomainError::InvalidLink(_)
            | DomainError::InvalidInput(_) => ApiError::BadRequest(message),
            DomainError::MenuNotFound(_)
            | DomainError::ParentNotFound(_)
            | DomainError::LookupNotFound { .. } => ApiError::NotFound(message),
            DomainError::CycleDetected { .. } => ApiError::Conflict(message),
            DomainError::DatabaseError(_) => ApiError::DatabaseError(message),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_api_classes() {
        let cases = [
            (DomainError::TitleRequired, StatusCode::BAD_REQUEST),
            (
                DomainError::InvalidLink("two link targets".into()),
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::MenuNotFound(7), StatusCode::NOT_FOUND),
            (DomainError::ParentNotFound(7), StatusCode::NOT_FOUND),
            (
                DomainError::CycleDetected { id: 1, parent_id: 2 },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::DatabaseError("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (domain_err, expected) in cases {
            let api: ApiError = domain_err.into();
            assert_eq!(api.into_response().status(), expected);
        }
    }
}
