//! API error types.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use sforge_genai::GenAiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Generic user-facing notice for upstream failures. Transport errors and
/// contract mismatches look the same to the client; the cause is logged.
pub const GENERATION_FAILED_NOTICE: &str = "The AI request failed. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Input does not satisfy the capability's input contract.
    #[error("Validation error")]
    Validation(ValidationErrors),

    /// Capability-specific required combination not met.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The external model call failed, either outright or by returning a
    /// response that does not satisfy the output contract.
    #[error("Generation failed: {0}")]
    Generation(GenAiError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Precondition(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Generation(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<GenAiError> for ApiError {
    fn from(error: GenAiError) -> Self {
        match error {
            GenAiError::Precondition(msg) => Self::Precondition(msg),
            GenAiError::MissingApiKey => Self::Internal(error.to_string()),
            other => Self::Generation(other),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    /// Per-field validation messages, keyed by the submitted field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<BTreeMap<String, Vec<String>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation(errors) => ErrorResponse {
                detail: "Please fix the highlighted fields.".to_string(),
                code: Some("validation".to_string()),
                fields: Some(field_messages(errors)),
            },
            ApiError::Precondition(msg) => ErrorResponse {
                detail: msg.clone(),
                code: Some("precondition".to_string()),
                fields: None,
            },
            ApiError::BadRequest(msg) => ErrorResponse {
                detail: msg.clone(),
                code: None,
                fields: None,
            },
            ApiError::Generation(_) => ErrorResponse {
                detail: GENERATION_FAILED_NOTICE.to_string(),
                code: Some("generation_failed".to_string()),
                fields: None,
            },
            ApiError::Internal(_) => ErrorResponse {
                // Don't expose internal error details in production
                detail: if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                },
                code: None,
                fields: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Flatten validation errors into submitted-field-name -> messages.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (snake_to_camel(field), messages)
        })
        .collect()
}

/// Rust field names are snake_case; the wire contract is camelCase.
fn snake_to_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
