//! HTTP-facing error type and its JSON envelope.
//!
//! Every error response has the shape
//! `{"error": {"code": "...", "message": "...", "details": {...}}}`.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::RegistryError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its JSON payload.
    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Unauthorized { message, details } => ("unauthorized", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::Unauthorized { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let is_unauthorized = matches!(self, AppError::Unauthorized { .. });

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();

        if is_unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(r#"Basic realm="alias-shortener""#),
            );
        }

        response
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::AliasExists { alias } => {
                AppError::conflict("Alias already exists", json!({ "alias": alias }))
            }
            RegistryError::AliasNotFound { alias } => {
                AppError::not_found("Alias not found", json!({ "alias": alias }))
            }
            // The storage detail stays in the logs.
            RegistryError::StorageUnavailable(_) => {
                AppError::internal("Storage unavailable", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("field {} is invalid", field),
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::bad_request("Invalid request", Value::Object(fields))
    }
}
