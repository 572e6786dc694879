//! Error handling for the HTTP layer

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::response::Status;

/// Error response body: `{"status": "fail" | "error", "message", "code"}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: Status,
    pub message: String,
    pub code: String,
}

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {message}")]
    Validation { message: String, code: String },

    #[error("not found: {message}")]
    NotFound { message: String, code: String },

    #[error("bad request: {message}")]
    BadRequest { message: String, code: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            code: "validation_error".to_string(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            code: "not_found".to_string(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            code: "bad_request".to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let trace_id = Uuid::new_v4();
        let timestamp = OffsetDateTime::now_utc();
        let status = self.status_code();

        let (error_code, message) = match self {
            AppError::Validation { message, code }
            | AppError::NotFound { message, code }
            | AppError::BadRequest { message, code } => (code, message),
            AppError::Internal(e) => ("internal_error".to_string(), format!("{:#}", e)),
        };

        if status.is_server_error() {
            tracing::error!(
                trace_id = %trace_id,
                error_code = %error_code,
                status_code = %status.as_u16(),
                %timestamp,
                error = %message,
                "request failed"
            );
        } else {
            tracing::warn!(
                trace_id = %trace_id,
                error_code = %error_code,
                status_code = %status.as_u16(),
                %timestamp,
                "request rejected"
            );
        }

        let (outcome, message) = if status.is_server_error() {
            // Internal details stay in the logs for release builds.
            let message = if cfg!(debug_assertions) {
                message
            } else {
                "An internal server error occurred".to_string()
            };
            (Status::Error, message)
        } else {
            (Status::Fail, message)
        };

        let body = ErrorBody {
            status: outcome,
            message,
            code: error_code,
        };

        (status, Json(body)).into_response()
    }
}
