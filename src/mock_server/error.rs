//! Error taxonomy of the mock server's logic layer.
//!
//! The logic layer is the only producer of these errors; the store only
//! raises structural failures (mapped to `Internal` here) and the
//! handlers never invent kinds of their own. The `IntoResponse` impl is
//! the single place where a kind becomes an HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::store::EmptyKey;

/// A business-rule failure.
#[derive(Debug, Error)]
pub enum LogicError {
    /// Malformed or missing request argument, e.g. an empty id.
    #[error("{0}")]
    InvalidArgument(String),

    /// Semantically invalid input, e.g. a record missing required fields.
    #[error("{0}")]
    Validation(String),

    /// A cross-kind reference that does not resolve.
    #[error("{0}")]
    Reference(String),

    /// The identifier does not resolve within its kind.
    #[error("no {kind} with id <{id}> is found")]
    NotFound { kind: &'static str, id: String },

    /// A uniqueness or marker-flag rule would be violated.
    #[error("{0}")]
    Conflict(String),

    /// Store or serialization failure; should not occur under correct use.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LogicError {
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        LogicError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Machine-checkable error kind carried in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            LogicError::InvalidArgument(_) => "invalid_argument",
            LogicError::Validation(_) => "validation",
            LogicError::Reference(_) => "reference",
            LogicError::NotFound { .. } => "not_found",
            LogicError::Conflict(_) => "conflict",
            LogicError::Internal(_) => "internal",
        }
    }

    /// Transport status for this kind.
    pub fn status(&self) -> StatusCode {
        match self {
            LogicError::InvalidArgument(_)
            | LogicError::Validation(_)
            | LogicError::Reference(_) => StatusCode::BAD_REQUEST,
            LogicError::NotFound { .. } => StatusCode::NOT_FOUND,
            LogicError::Conflict(_) => StatusCode::CONFLICT,
            LogicError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EmptyKey> for LogicError {
    fn from(err: EmptyKey) -> Self {
        LogicError::Internal(err.to_string())
    }
}

impl IntoResponse for LogicError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "type": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

/// Result alias for logic-layer operations.
pub type LogicResult<T> = Result<T, LogicError>;
