//! HTTP API errors
//!
//! Every failure leaves the handler as `{ "error": { "status", "message" } }`.
//! Validation failures carry the ordered violation list as `message`;
//! everything else carries a single string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::books::BookError;
use crate::schema::ValidationError;

/// Message returned for any 5xx; details go to the log only
const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Payload failed its schema
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Request body could not be read
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Unknown isbn
    #[error("{0}")]
    NotFound(String),

    /// No route matched
    #[error("Not Found")]
    RouteNotFound,

    /// Duplicate isbn on create
    #[error("{0}")]
    Conflict(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store or other internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> ErrorMessage {
        match self {
            ApiError::Validation(err) => ErrorMessage::List(err.messages()),
            ApiError::Internal(_) => ErrorMessage::Text(INTERNAL_MESSAGE.to_string()),
            other => ErrorMessage::Text(other.to_string()),
        }
    }
}

/// Handler for any request no route accepts, whether the path or only
/// the method is unknown
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::Validation(err) => ApiError::Validation(err),
            BookError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BookError::Conflict(_) => ApiError::Conflict(err.to_string()),
            BookError::Store(err) => ApiError::Internal(err.to_string()),
        }
    }
}

/// `message` is either a single string or the ordered violation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: ErrorMessage,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: ErrorBody {
                status: err.status_code().as_u16(),
                message: err.message(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
