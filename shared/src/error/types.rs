//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the back office, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level validation errors, ids)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a data store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreError, msg)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut err = AppError::validation("Validation failed");
        let fields = errors.field_errors();
        // Most specific code wins when the form has a single failing field
        if fields.len() == 1
            && let Some(code) = fields
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|e| field_error_code(&e.code))
        {
            err.code = code;
        }
        for (field, errs) in fields {
            let messages: Vec<Value> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| Value::String(m.to_string()))
                        .unwrap_or_else(|| Value::String(e.code.to_string()))
                })
                .collect();
            err = err.with_detail(field.to_string(), Value::Array(messages));
        }
        err
    }
}

/// Map a validator rule code onto a domain error code
fn field_error_code(code: &str) -> Option<ErrorCode> {
    match code {
        "menu_price" => Some(ErrorCode::MenuItemInvalidPrice),
        "menu_preparation_time" => Some(ErrorCode::MenuItemInvalidPreparationTime),
        "staff_salary" => Some(ErrorCode::StaffInvalidSalary),
        "staff_birth_date" => Some(ErrorCode::StaffInvalidBirthDate),
        "required" | "length" => Some(ErrorCode::RequiredField),
        _ => None,
    }
}

/// Unified API response structure
///
/// Provides a consistent response format for all API endpoints:
/// - `code`: Error code (0 for success)
/// - `message`: Human-readable message
/// - `data`: Response payload (on success)
/// - `details`: Additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = match self.code {
            None | Some(0) => http::StatusCode::OK,
            Some(code) => ErrorCode::try_from(code)
                .map(|c| c.http_status())
                .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR),
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "email")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "email");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::not_found("Staff member 7");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Staff member 7 not found");
        assert!(err.details.as_ref().unwrap().contains_key("resource"));

        assert_eq!(AppError::store("lock poisoned").code, ErrorCode::StoreError);
        assert_eq!(
            AppError::internal("seed failed").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[derive(Validate)]
    struct PriceOnly {
        #[validate(range(min = 0.0, code = "menu_price"))]
        price: f64,
    }

    #[test]
    fn test_validation_errors_map_to_domain_code() {
        let errors = PriceOnly { price: -1.0 }.validate().unwrap_err();
        let err = AppError::from(errors);
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
        assert!(err.details.unwrap().contains_key("price"));
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::with_message(ErrorCode::StaffNotFound, "Staff member 9 not found")
            .with_detail("id", 9);
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(8001));
        assert_eq!(response.message, "Staff member 9 not found");
        assert!(response.data.is_none());
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":0"));
        assert!(json.contains("\"message\":\"OK\""));
        assert!(json.contains("\"data\":\"hello\""));

        let parsed: ApiResponse<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.data.as_deref(), Some("hello"));
    }
}
