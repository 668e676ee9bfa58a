//! Typed error handling for person-api
//!
//! Every failure a handler or extractor can produce is an [`ApiError`], which
//! knows its HTTP status, a stable error code and optional structured details.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: one or more request fields violate their constraints
//! - [`PersonError`]: lookups against the person registry
//! - [`RequestError`]: transport level problems (oversized body, bad header)
//!
//! # Example
//!
//! ```rust,ignore
//! use person_api::prelude::*;
//!
//! fn lookup(person_id: u64) -> ApiResult<()> {
//!     if !PERSONS.contains(person_id) {
//!         return Err(PersonError::NotFound { person_id }.into());
//!     }
//!     Ok(())
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The main error type for person-api
#[derive(Debug)]
pub enum ApiError {
    /// Input validation errors
    Validation(ValidationError),

    /// Person registry errors
    Person(PersonError),

    /// HTTP/Request errors
    Request(RequestError),

    /// Unexpected failures (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "{}", e),
            ApiError::Person(e) => write!(f, "{}", e),
            ApiError::Request(e) => write!(f, "{}", e),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            ApiError::Person(e) => Some(e),
            ApiError::Request(e) => Some(e),
            ApiError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Person(e) => e.status_code(),
            ApiError::Request(e) => e.status_code(),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(e) => e.error_code(),
            ApiError::Person(e) => e.error_code(),
            ApiError::Request(e) => e.error_code(),
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            ApiError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            ApiError::Person(PersonError::NotFound { person_id }) => {
                Some(serde_json::json!({ "person_id": person_id }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(code = self.error_code(), "request rejected: {}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Every violated field of one input, in declaration order
    FieldErrors(Vec<FieldValidationError>),

    /// The body could not be decoded at all (malformed JSON, form or multipart)
    InvalidBody { message: String },
}

/// A single field violation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    /// Field name, dotted for nested models (`person.age`)
    pub field: String,
    /// Name of the violated rule (`missing`, `type`, `range`, `pattern`, ...)
    pub constraint: String,
    pub message: String,
    /// The offending input value; absent for missing fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            message: format!("field '{}' is required", field),
            field,
            constraint: "missing".to_string(),
            value: None,
        }
    }

    pub fn violated(
        field: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
        value: &Value,
    ) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
            message: message.into(),
            value: Some(value.clone()),
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidBody { .. } => "INVALID_BODY",
        }
    }

    /// The recorded field violations (empty for undecodable bodies)
    pub fn field_errors(&self) -> &[FieldValidationError] {
        match self {
            ValidationError::FieldErrors(errors) => errors,
            ValidationError::InvalidBody { .. } => &[],
        }
    }

    /// Join the violations of two request sources, `self` first
    ///
    /// An undecodable body cannot list fields, so it takes precedence.
    pub fn merge(self, other: ValidationError) -> ValidationError {
        match (self, other) {
            (ValidationError::FieldErrors(mut first), ValidationError::FieldErrors(second)) => {
                first.extend(second);
                ValidationError::FieldErrors(first)
            }
            (invalid @ ValidationError::InvalidBody { .. }, _) => invalid,
            (_, invalid) => invalid,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

// =============================================================================
// Person Errors
// =============================================================================

/// Errors related to the person registry
#[derive(Debug)]
pub enum PersonError {
    NotFound { person_id: u64 },
}

impl fmt::Display for PersonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonError::NotFound { .. } => write!(f, "This person doesn't exist"),
        }
    }
}

impl std::error::Error for PersonError {}

impl PersonError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PersonError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PersonError::NotFound { .. } => "PERSON_NOT_FOUND",
        }
    }
}

impl From<PersonError> for ApiError {
    fn from(err: PersonError) -> Self {
        ApiError::Person(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP request handling
#[derive(Debug)]
pub enum RequestError {
    /// Body exceeded the configured upload cap
    PayloadTooLarge { message: String },

    /// Header present but not valid visible ASCII
    InvalidHeader { header: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::PayloadTooLarge { message } => {
                write!(f, "Request body too large: {}", message)
            }
            RequestError::InvalidHeader { header } => {
                write!(f, "Invalid value for header: {}", header)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RequestError::InvalidHeader { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            RequestError::InvalidHeader { .. } => "INVALID_HEADER",
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::Request(err)
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for person-api handlers
pub type ApiResult<T> = Result<T, ApiError>;
