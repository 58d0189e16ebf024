//! Server-wide error taxonomy and the HTTP boundary classifier
//!
//! Every failure in a query handler propagates (via `?` and per-feature error
//! enums) to exactly one place: `AppError::into_response`. The classifier maps
//! error kind to status code and a user-safe message; the raw error is written
//! only to the log sink.
//!
//! Store errors are classified by SQLSTATE in [`classify_sqlx`]:
//! connection-shaped failures are transient (503, caller may retry),
//! constraint violations map to 409/400, and a missing relation is a
//! deployment defect (500) logged distinctly from request errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::response::{ErrorResponse, FieldError};

/// Result type alias for server operations
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database temporarily unavailable: {0}")]
    TransientStore(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("EEI error: {0}")]
    Common(#[from] eei_common::EeiError),
}

impl AppError {
    /// Validation failure without field-level detail
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Validation failure with field-level detail
    pub fn validation_fields(message: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self::Validation {
            message: message.into(),
            fields,
        }
    }

    /// Not-found error with resource context
    pub fn not_found(resource_type: &str, identifier: &str) -> Self {
        Self::NotFound(format!("{} '{}' not found", resource_type, identifier))
    }
}

/// Classify a sqlx error into the server taxonomy
///
/// SQLSTATE classes: 23xxx are integrity violations, 42xxx means the schema
/// the query expects does not exist, 08xxx / 53300 / 57P03 are
/// connection-level conditions.
pub fn classify_sqlx(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => {
            return AppError::NotFound("Requested record was not found".to_string());
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            return AppError::TransientStore(err.to_string());
        }
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code = code.as_ref();
                if code == "23505" {
                    return AppError::Conflict(db_err.to_string());
                }
                if code.starts_with("23") {
                    return AppError::Constraint(db_err.to_string());
                }
                if code.starts_with("42") {
                    return AppError::Schema(db_err.to_string());
                }
                if code.starts_with("08") || code == "53300" || code == "57P03" {
                    return AppError::TransientStore(db_err.to_string());
                }
            }
        }
        _ => {}
    }

    AppError::Internal(err.to_string())
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        classify_sqlx(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { message, fields } => {
                let body = if fields.is_empty() {
                    ErrorResponse::new("VALIDATION_ERROR", message)
                } else {
                    ErrorResponse::with_fields("VALIDATION_ERROR", message, fields)
                };
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new("NOT_FOUND", message))
            }
            AppError::TransientStore(detail) => {
                tracing::error!(detail = %detail, "Transient database error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(
                        "SERVICE_UNAVAILABLE",
                        "The database is temporarily unavailable",
                    ),
                )
            }
            AppError::Conflict(message) => {
                (StatusCode::CONFLICT, ErrorResponse::new("CONFLICT", message))
            }
            AppError::Constraint(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("CONSTRAINT_VIOLATION", message),
            ),
            AppError::Schema(detail) => {
                tracing::error!(detail = %detail, "Schema error: expected relation or column is missing");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("SCHEMA_ERROR", "A server-side schema error occurred"),
                )
            }
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
            AppError::Common(err) => {
                tracing::error!(error = ?err, "EEI error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = classify_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_pool_timeout_is_transient() {
        let err = classify_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::TransientStore(_)));
    }

    #[test]
    fn test_io_error_is_transient() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = classify_sqlx(sqlx::Error::Io(io));
        assert!(matches!(err, AppError::TransientStore(_)));
    }

    #[test]
    fn test_validation_helper_has_no_fields() {
        let err = AppError::validation("at least one anchor is required");
        match err {
            AppError::Validation { fields, .. } => assert!(fields.is_empty()),
            _ => panic!("expected validation error"),
        }
    }
}
