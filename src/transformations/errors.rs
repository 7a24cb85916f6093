use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    RemoteService(String),
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Storage(String),
}

impl TransformError {
    pub fn status_code(&self) -> StatusCode {
        match *self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Remote error phrases that get a friendlier rewrite before reaching users.
const KNOWN_REMOTE_ERRORS: [(&str, &str); 6] = [
    (
        "Invalid input",
        "The uploaded image is not valid or is in an unsupported format",
    ),
    (
        "Rate limit exceeded",
        "Too many requests. Please try again in a few minutes",
    ),
    (
        "Insufficient credits",
        "Your account has insufficient credits to process this request",
    ),
    (
        "Model not found",
        "The transformation model is currently unavailable",
    ),
    (
        "Invalid API token",
        "The API token is invalid or has expired",
    ),
    (
        "Input validation failed",
        "The image or transformation options are invalid",
    ),
];

pub fn user_facing_message(remote_error: &str) -> String {
    KNOWN_REMOTE_ERRORS
        .iter()
        .find(|(remote, _)| *remote == remote_error)
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| remote_error.to_string())
}
