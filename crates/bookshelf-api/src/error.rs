//! Error types for the HTTP API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookshelf_core::StoreError;
use bookshelf_types::BookId;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No book has the requested id.
    #[error("Book not found")]
    NotFound(BookId),

    /// A caller-supplied id on create is already taken.
    #[error("Book id already exists")]
    Conflict(BookId),

    /// The id path segment is not an integer.
    #[error("invalid book id: {0}")]
    InvalidId(String),

    /// The request body was rejected by the JSON extractor.
    #[error("invalid request body: {message}")]
    InvalidBody {
        /// Status chosen by the extractor (400, 415, or 422).
        status: StatusCode,
        /// The extractor's explanation.
        message: String,
    },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateId(id) => Self::Conflict(id),
            StoreError::IdSpaceExhausted => Self::Internal(err.to_string()),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::InvalidBody { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            Self::NotFound(id) | Self::Conflict(id) => serde_json::json!({
                "error": self.to_string(),
                "id": id,
            }),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal API error");
                serde_json::json!({
                    "error": self.to_string(),
                    "status": status.as_u16(),
                })
            }
            Self::InvalidId(_) | Self::InvalidBody { .. } => serde_json::json!({
                "error": self.to_string(),
                "status": status.as_u16(),
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}
