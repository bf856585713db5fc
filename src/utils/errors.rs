//! Application error handling
//!
//! Defines every error kind the engine can surface and its mapping to an
//! HTTP response. Rule violations are recoverable 4xx errors; only storage
//! and internal failures map to 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid payload: {0}")]
    Payload(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error payload rendered to API clients
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: false,
                        error: "DATABASE_ERROR".to_string(),
                        message: "An error occurred while accessing the database"
                            .to_string(),
                        details: None,
                    },
                )
            }

            AppError::Validation(msg) => {
                warn!(message = %msg, "validation error");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        success: false,
                        error: "VALIDATION_ERROR".to_string(),
                        message: msg,
                        details: None,
                    },
                )
            }

            AppError::Payload(e) => {
                warn!(error = %e, "invalid payload");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        success: false,
                        error: "VALIDATION_ERROR".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                    },
                )
            }

            AppError::Unauthorized(msg) => {
                warn!(message = %msg, "unauthorized");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        success: false,
                        error: "UNAUTHORIZED".to_string(),
                        message: msg,
                        details: None,
                    },
                )
            }

            AppError::Forbidden(msg) => {
                warn!(message = %msg, "forbidden");
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse {
                        success: false,
                        error: "FORBIDDEN".to_string(),
                        message: msg,
                        details: None,
                    },
                )
            }

            AppError::NotFound(msg) => {
                warn!(message = %msg, "resource not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        success: false,
                        error: "NOT_FOUND".to_string(),
                        message: msg,
                        details: None,
                    },
                )
            }

            AppError::Conflict(msg) => {
                warn!(message = %msg, "conflict");
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        success: false,
                        error: "CONFLICT".to_string(),
                        message: msg,
                        details: None,
                    },
                )
            }

            AppError::InvalidState(msg) => {
                warn!(message = %msg, "invalid state");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        success: false,
                        error: "INVALID_STATE".to_string(),
                        message: msg,
                        details: None,
                    },
                )
            }

            AppError::Jwt(msg) => {
                warn!(message = %msg, "jwt error");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        success: false,
                        error: "JWT_ERROR".to_string(),
                        message: msg,
                        details: None,
                    },
                )
            }

            AppError::Internal(msg) => {
                error!(message = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: false,
                        error: "INTERNAL_ERROR".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Typed result for fallible operations
pub type AppResult<T> = Result<T, AppError>;

/// True when the error is a Postgres unique violation on the given constraint.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            db.code().as_deref() == Some("23505")
                && db.constraint().map_or(true, |c| c == constraint)
        }
        _ => false,
    }
}

/// Helper for not-found errors
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Helper for uniqueness conflicts
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidState("fixed".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (AppError::Conflict("dup".into()), StatusCode::CONFLICT),
            (AppError::Unauthorized("no".into()), StatusCode::UNAUTHORIZED),
            (AppError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_helpers() {
        let err = not_found_error("Vehicle", "abc");
        assert!(matches!(err, AppError::NotFound(_)));

        let err = conflict_error("Vehicle", "vin", "1HGBH41JXMN109186");
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_is_unique_violation_ignores_other_errors() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound, "uq_whatever"));
    }
}
