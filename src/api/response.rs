//! Response types for the tracker API.
//!
//! This module defines the error and confirmation bodies and the mapping
//! from [`TrackerError`] to HTTP status codes.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Message body for the status route and delete confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Human-readable message.
    pub message: String,
}

impl StatusMessage {
    /// Creates a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable reason, shown to end users.
    pub detail: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        detail: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(detail: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", detail)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(detail: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", detail)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        let detail = error.to_string();
        match error {
            TrackerError::InvalidEmployee { employee_id } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    detail,
                    format!("Unknown employee id '{employee_id}'"),
                ),
            ),
            TrackerError::SameDayLeave => {
                ApiErrorResponse::bad_request(ApiError::new("SAME_DAY_LEAVE", detail))
            }
            TrackerError::ExclusivePairConflict { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("EXCLUSIVE_PAIR_CONFLICT", detail))
            }
            TrackerError::SlotLimitReached { limit } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "SLOT_LIMIT_REACHED",
                    detail,
                    format!("Daily leave cap of {limit} reached"),
                ),
            ),
            TrackerError::AlreadyOnLeave => {
                ApiErrorResponse::bad_request(ApiError::new("ALREADY_ON_LEAVE", detail))
            }
            TrackerError::MissingHours => {
                ApiErrorResponse::bad_request(ApiError::new("MISSING_HOURS", detail))
            }
            TrackerError::NotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NOT_FOUND", detail),
            },
            TrackerError::Store { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Internal Server Error", message),
            },
            TrackerError::ConfigNotFound { .. }
            | TrackerError::ConfigParseError { .. }
            | TrackerError::ConfigInvalid { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", detail),
            },
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            // well-formed JSON that does not fit the request type
            JsonRejection::JsonDataError(err) => ApiError::validation_error(err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        ApiErrorResponse::bad_request(error)
    }
}

impl From<QueryRejection> for ApiErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    }
}
