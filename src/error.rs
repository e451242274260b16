//! Error types for Graylog API operations.

use thiserror::Error;

/// Errors that can occur during Graylog API operations.
#[derive(Debug, Error)]
pub enum GraylogError {
    /// Configuration is missing or incomplete.
    #[error("Graylog configuration required: {0}")]
    ConfigMissing(String),

    /// A required argument is missing or malformed (e.g., an empty id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// API request failed.
    #[error("Graylog API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl GraylogError {
    /// HTTP status code of the failed request, if the error came from
    /// an API response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GraylogError::ApiError { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

/// Result type alias for Graylog operations.
pub type Result<T> = core::result::Result<T, GraylogError>;
