//! Error bodies returned by the desk's REST layer.
//!
//! Every [`DeskError`] maps to one HTTP status and a stable `code`; see
//! [`ApiErrorResponse`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::DeskError;

/// JSON error body: `{"code": "...", "message": "...", "details": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable code such as `CONFLICT` or `PAYROLL_API_ERROR`.
    pub code: String,
    /// Operator-facing message, e.g. `already approved`.
    pub message: String,
    /// Extra context, such as the payroll API's status and message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error body without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error body carrying `details`.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// `VALIDATION_ERROR`: the pay period or request body was rejected.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// `MALFORMED_JSON`: the request body is not JSON.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An [`ApiError`] body with the status it is sent with.
pub struct ApiErrorResponse {
    /// Status derived from the [`DeskError`] variant.
    pub status: StatusCode,
    /// JSON body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DeskError> for ApiErrorResponse {
    fn from(error: DeskError) -> Self {
        let (status, error) = match error {
            DeskError::Validation(message) => {
                (StatusCode::BAD_REQUEST, ApiError::validation_error(message))
            }
            DeskError::Precondition(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("PRECONDITION_FAILED", message),
            ),
            DeskError::Conflict(message) => (StatusCode::CONFLICT, ApiError::new("CONFLICT", message)),
            DeskError::Network { status, message } => (
                StatusCode::BAD_GATEWAY,
                ApiError::with_details(
                    "PAYROLL_API_ERROR",
                    "Payroll API request failed",
                    match status {
                        Some(status) => format!("{} ({})", message, status),
                        None => message,
                    },
                ),
            ),
            err @ DeskError::InvalidTransition { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("INVALID_TRANSITION", err.to_string()),
            ),
            DeskError::PayRunNotFound { pay_run_id } => (
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "PAY_RUN_NOT_FOUND",
                    format!("Pay run not found: {}", pay_run_id),
                    "No pay run with this id exists in the payroll API",
                ),
            ),
            err @ DeskError::Forbidden { .. } => {
                (StatusCode::FORBIDDEN, ApiError::new("FORBIDDEN", err.to_string()))
            }
            DeskError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                ApiError::new("UNAUTHENTICATED", "No active session"),
            ),
            err @ (DeskError::ConfigNotFound { .. } | DeskError::ConfigParseError { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", err.to_string()),
            ),
            DeskError::Session { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("SESSION_ERROR", "Session storage error", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
