//! # Error Handling
//!
//! Unified error handling for the academy API. Every failure leaves the
//! service as a problem+json body carrying a stable `code`, a human-readable
//! `message`, optional `details` and the request's trace id.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

use crate::telemetry;

/// Unified API error response structure
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    /// HTTP status code for the response
    #[serde(skip_serializing)]
    pub status: StatusCode,
    /// Error code for programmatic handling
    pub code: Box<str>,
    /// Human-readable error message
    pub message: Box<str>,
    /// Additional error details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Box<serde_json::Value>>,
    /// Correlation trace ID for debugging (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<Box<str>>,
}

impl ApiError {
    /// Create a new API error with the given status code and message
    pub fn new<S: Into<String>>(status: StatusCode, code: S, message: S) -> Self {
        Self {
            status,
            code: code.into().into_boxed_str(),
            message: message.into().into_boxed_str(),
            details: None,
            trace_id: Self::current_trace_id(),
        }
    }

    /// Add details to the error
    pub fn with_details<V: Into<serde_json::Value>>(mut self, details: V) -> Self {
        self.details = Some(Box::new(details.into()));
        self
    }

    /// Trace id of the running request, or a short correlation id outside one
    fn current_trace_id() -> Option<Box<str>> {
        telemetry::current_trace_id()
            .map(|trace_id| trace_id.into_boxed_str())
            .or_else(|| {
                Some(format!("corr-{}", &uuid::Uuid::new_v4().to_string()[..8]).into_boxed_str())
            })
    }
}

/// Standard error types with predefined status codes
#[derive(Debug, Error)]
pub enum ErrorType {
    #[error("Bad Request")]
    BadRequest,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Service Unavailable")]
    ServiceUnavailable,
}

impl ErrorType {
    /// Get the appropriate HTTP status code for this error type
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorType::BadRequest => StatusCode::BAD_REQUEST,
            ErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorType::Forbidden => StatusCode::FORBIDDEN,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Builds an [`ApiError`] of this type carrying `message`
    pub fn with_message(&self, message: &str) -> ApiError {
        ApiError::new(self.status_code(), self.error_code(), message)
    }

    /// Get the SCREAMING_SNAKE_CASE error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ErrorType::BadRequest => "VALIDATION_FAILED",
            ErrorType::Unauthorized => "UNAUTHORIZED",
            ErrorType::Forbidden => "FORBIDDEN",
            ErrorType::NotFound => "NOT_FOUND",
            ErrorType::InternalServerError => "INTERNAL_SERVER_ERROR",
            ErrorType::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }
}

/// Failures surfaced by repositories and the services layered on them.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
    #[error("{0}")]
    Internal(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/problem+json"),
        );

        if let Some(trace_id) = self.trace_id.as_deref()
            && let Ok(header_value) = HeaderValue::from_str(trace_id)
        {
            headers.insert("x-trace-id", header_value);
        }

        (self.status, headers, axum::Json(self)).into_response()
    }
}

// Error mappers for common sources

impl From<ErrorType> for ApiError {
    fn from(error_type: ErrorType) -> Self {
        error_type.with_message(&error_type.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        tracing::error!("Internal error: {:?}", error);

        ErrorType::InternalServerError.with_message("An internal error occurred")
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                format!("JSON syntax error: {}", err.body_text())
            }
            JsonRejection::MissingJsonContentType(_) => {
                "Missing 'Content-Type: application/json' header".to_string()
            }
            _ => "Invalid request body".to_string(),
        };

        ErrorType::BadRequest.with_message(&message)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let message = match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                format!("Invalid path parameter: {}", err.body_text())
            }
            _ => "Invalid path parameters".to_string(),
        };

        ErrorType::BadRequest.with_message(&message)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { .. } => ErrorType::NotFound.with_message(&error.to_string()),
            RepositoryError::Validation { field, message } => {
                let details = json!({ "field": field, "message": &message });
                validation_error(&message, details)
            }
            RepositoryError::Database(sea_orm::DbErr::RecordNotFound(record)) => {
                ErrorType::NotFound.with_message(&format!("Record not found: {}", record))
            }
            RepositoryError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error");
                ErrorType::InternalServerError
                    .with_message("Database error occurred")
                    .with_details(json!({ "repository_error": db_err.to_string() }))
            }
            RepositoryError::Internal(message) => {
                tracing::error!(error = %message, "Internal repository error");
                ErrorType::InternalServerError
                    .with_message("An internal error occurred")
                    .with_details(json!({ "repository_error": message }))
            }
        }
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(error: sea_orm::DbErr) -> Self {
        RepositoryError::Database(error).into()
    }
}

/// Create an unauthorized error (401)
pub fn unauthorized(message: Option<&str>) -> ApiError {
    let msg = message.unwrap_or("Authentication required");
    ErrorType::Unauthorized.with_message(msg)
}

/// Create a forbidden error (403)
pub fn forbidden(message: Option<&str>) -> ApiError {
    let msg = message.unwrap_or("Insufficient permissions");
    ErrorType::Forbidden.with_message(msg)
}

/// Create a validation error with field details
pub fn validation_error(message: &str, field_errors: serde_json::Value) -> ApiError {
    ErrorType::BadRequest.with_message(message).with_details(field_errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_every_error_type_builds_matching_status_and_code() {
        for (error_type, status, code) in [
            (ErrorType::BadRequest, StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            (ErrorType::Unauthorized, StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            (ErrorType::Forbidden, StatusCode::FORBIDDEN, "FORBIDDEN"),
            (ErrorType::NotFound, StatusCode::NOT_FOUND, "NOT_FOUND"),
            (
                ErrorType::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
            ),
            (
                ErrorType::ServiceUnavailable,
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
            ),
        ] {
            let error = error_type.with_message("boom");
            assert_eq!(error.status, status);
            assert_eq!(&*error.code, code);
            assert_eq!(&*error.message, "boom");
        }
    }

    #[test]
    fn test_api_error_basic() {
        let error = ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            "Test error message",
        );

        assert_eq!(error.code, Box::from("VALIDATION_FAILED"));
        assert_eq!(error.message, Box::from("Test error message"));
        assert_eq!(error.details, None);
    }

    #[test]
    fn test_api_error_with_details() {
        let error = ApiError::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", "Test error message")
            .with_details(json!({"field": "value"}));

        assert_eq!(error.details, Some(Box::new(json!({"field": "value"}))));
    }

    #[test]
    fn test_error_type_mapping() {
        let not_found_error: ApiError = ErrorType::NotFound.into();
        assert_eq!(not_found_error.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found_error.code, Box::from("NOT_FOUND"));
        assert_eq!(not_found_error.message, Box::from("Not Found"));

        let unavailable: ApiError = ErrorType::ServiceUnavailable.into();
        assert_eq!(unavailable.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_from_anyhow() {
        let api_error: ApiError = anyhow::anyhow!("Something went wrong").into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.code, Box::from("INTERNAL_SERVER_ERROR"));
        assert_eq!(api_error.message, Box::from("An internal error occurred"));
    }

    #[test]
    fn test_content_type_and_trace_headers() {
        let error = ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", "Test error");
        let trace_id = error.trace_id.clone().unwrap();

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/problem+json"
        );
        assert_eq!(
            response.headers().get("x-trace-id").unwrap(),
            trace_id.as_ref()
        );
    }

    #[test]
    fn test_trace_id_generation() {
        let error = ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            "Test error",
        );

        let trace_id = error.trace_id.unwrap();
        assert!(trace_id.starts_with("corr-"));
        assert_eq!(trace_id.len(), 13);
    }

    #[tokio::test]
    async fn test_trace_id_taken_from_active_context() {
        let context = telemetry::TraceContext {
            trace_id: "trace-abc".to_string(),
        };

        let error = telemetry::with_trace_context(context, async {
            ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", "missing")
        })
        .await;

        assert_eq!(error.trace_id, Some(Box::from("trace-abc")));
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let api_error: ApiError = RepositoryError::not_found("venue", "42").into();

        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.code, Box::from("NOT_FOUND"));
        assert_eq!(api_error.message, Box::from("venue 42 not found"));
    }

    #[test]
    fn test_repository_validation_maps_to_400_with_field() {
        let api_error: ApiError =
            RepositoryError::validation("capacity", "capacity must not be negative").into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.code, Box::from("VALIDATION_FAILED"));
        assert_eq!(
            api_error.details,
            Some(Box::new(json!({
                "field": "capacity",
                "message": "capacity must not be negative"
            })))
        );
    }

    #[test]
    fn test_database_error_maps_to_500_with_repository_error() {
        let db_error = sea_orm::DbErr::Custom("FOREIGN KEY constraint failed".to_string());
        let api_error: ApiError = RepositoryError::Database(db_error).into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.code, Box::from("INTERNAL_SERVER_ERROR"));
        let details = api_error.details.unwrap();
        assert!(
            details["repository_error"]
                .as_str()
                .unwrap()
                .contains("FOREIGN KEY")
        );
    }

    #[test]
    fn test_record_not_found_maps_to_404() {
        let api_error: ApiError = sea_orm::DbErr::RecordNotFound("test_record".to_string()).into();

        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert!(api_error.message.contains("test_record"));
    }

    #[test]
    fn test_auth_error_helpers() {
        let auth_error = unauthorized(None);
        assert_eq!(auth_error.status, StatusCode::UNAUTHORIZED);
        assert_eq!(auth_error.code, Box::from("UNAUTHORIZED"));
        assert_eq!(auth_error.message, Box::from("Authentication required"));

        let custom_auth_error = unauthorized(Some("Invalid token"));
        assert_eq!(custom_auth_error.message, Box::from("Invalid token"));

        let forbidden_error = forbidden(None);
        assert_eq!(forbidden_error.status, StatusCode::FORBIDDEN);
        assert_eq!(forbidden_error.code, Box::from("FORBIDDEN"));
        assert_eq!(
            forbidden_error.message,
            Box::from("Insufficient permissions")
        );
    }

    #[test]
    fn test_validation_error_with_details() {
        let field_errors = json!({
            "name": "Name is required",
            "email": "Invalid email format"
        });

        let validation_error = validation_error("Validation failed", field_errors.clone());

        assert_eq!(validation_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(validation_error.code, Box::from("VALIDATION_FAILED"));
        assert_eq!(validation_error.details, Some(Box::new(field_errors)));
    }
}
