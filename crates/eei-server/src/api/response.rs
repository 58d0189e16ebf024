//! API response types
//!
//! Standard response structures for the EEI API. Success payloads are wrapped
//! in `{success: true, data: ...}`; failures in `{success: false, error,
//! message}` with an optional field-level `errors` array for validation
//! failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard success response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new success response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            meta: None,
        }
    }

    /// Create a success response with metadata
    pub fn success_with_meta(data: T, meta: serde_json::Value) -> Self {
        Self {
            success: true,
            data,
            meta: Some(meta),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Field-level detail for validation errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Standard error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Short machine-readable label, e.g. "VALIDATION_ERROR"
    pub error: String,
    /// Human-readable message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
            errors: None,
        }
    }

    /// Create an error response with field-level detail
    pub fn with_fields(
        error: impl Into<String>,
        message: impl Into<String>,
        fields: Vec<FieldError>,
    ) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
            errors: Some(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(serde_json::json!({"n": 1}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["n"], 1);
        assert!(value.get("meta").is_none());
    }

    #[test]
    fn test_error_envelope_omits_empty_errors() {
        let response = ErrorResponse::new("NOT_FOUND", "Exon 'X' not found");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "NOT_FOUND");
        assert!(value.get("errors").is_none());
    }

    #[test]
    fn test_error_envelope_with_fields() {
        let response = ErrorResponse::with_fields(
            "VALIDATION_ERROR",
            "Invalid request",
            vec![FieldError::new("limit", "must be at least 1")],
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["errors"][0]["field"], "limit");
    }
}
