//! Response types and error handling for API endpoints
//!
//! Every endpoint answers with the same envelope:
//! `{success, status, message, data}` on success and
//! `{success, status, message, error?}` on failure, where the `error`
//! detail string is only included outside production deployments.

use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use track_common::AppError;
use track_core::DomainError;
use track_service::ServiceError;
use tracing::error;
use validator::ValidationErrors;

/// Whether error responses carry the underlying detail string.
///
/// Set once at startup from the deployment environment; defaults to
/// hidden when the server was never fully initialized (tests hitting
/// handlers directly).
static EXPOSE_ERROR_DETAIL: OnceLock<bool> = OnceLock::new();

/// Configure error detail exposure (call once at startup)
pub fn set_expose_error_detail(expose: bool) {
    let _ = EXPOSE_ERROR_DETAIL.set(expose);
}

fn expose_error_detail() -> bool {
    EXPOSE_ERROR_DETAIL.get().copied().unwrap_or(false)
}

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Not authorized to access this route")]
    MissingAuth,

    #[error("Invalid authorization header format")]
    InvalidAuthFormat,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) => {
                if e.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if e.is_validation() || e.is_conflict() {
                    // Duplicate unique fields answer 400 here, not 409
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidQuery(_)
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::MissingAuth | Self::InvalidAuthFormat => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid path parameter error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid query parameter error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    /// Create an invalid request body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::Internal(source) => Some(format!("{source:#}")),
            Self::Validation(errors) => Some(errors.to_string()),
            _ => None,
        }
    }
}

/// Error envelope body
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    status: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let error = if expose_error_detail() {
            self.detail()
        } else {
            None
        };

        let body = ErrorEnvelope {
            success: false,
            status: status.as_u16(),
            message,
            error,
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Success envelope wrapping a JSON payload
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    success: bool,
    status: u16,
    message: String,
    data: T,
}

impl<T: Serialize> Envelope<T> {
    /// 200 OK envelope
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, data)
    }

    /// 201 Created envelope
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, data)
    }

    fn with_status(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            status: status.as_u16(),
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
