//! API error type and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tb_core::responses::ErrorResponse;
use tb_core::{ConflictKind, CoreError, ErrorKind};
use tb_db::error::DatabaseError;
use thiserror::Error;

/// Errors a handler can return. Every variant renders the error envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("missing caller address: set the X-User-Address header")]
    MissingCaller,

    /// Body, path or query could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Database(err) => err.kind(),
            Self::Core(err) => err.kind(),
            Self::MissingCaller | Self::BadRequest(_) => ErrorKind::Validation,
        }
    }

    /// Conflict code such as `already_assigned`, for conflict errors only.
    #[must_use]
    pub const fn conflict(&self) -> Option<&ConflictKind> {
        match self {
            Self::Core(CoreError::Conflict(kind))
            | Self::Database(DatabaseError::Core(CoreError::Conflict(kind))) => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        let body = ErrorResponse::new(
            self.kind(),
            self.conflict().map(ConflictKind::code),
            self.to_string(),
        );
        (status, Json(body)).into_response()
    }
}
