//! HTTP mapping for [`Error`].
//!
//! Client errors carry their message; server errors are logged and replaced by a
//! generic message so storage details never reach the browser.

use crate::errors::Error;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,
}

/// Status code for each error variant.
#[must_use]
pub fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Validation { .. } => StatusCode::BAD_REQUEST,
        Error::Unauthenticated => StatusCode::UNAUTHORIZED,
        Error::Forbidden { .. } => StatusCode::FORBIDDEN,
        Error::UserNotFound { .. } | Error::WishlistNotFound { .. } | Error::ItemNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        Error::Conflict { .. } => StatusCode::CONFLICT,
        Error::Config { .. } | Error::Database(_) | Error::Io(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let message = if status.is_server_error() {
            error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}
