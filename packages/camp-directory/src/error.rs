//! Error types for the camp directory client.

use thiserror::Error;

use crate::types::ValidationError;

/// Result type for directory client operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Directory client errors.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Configuration error (bad base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout); safe to retry
    #[error("Network error: {0}")]
    Network(String),

    /// Camp id unknown to the directory
    #[error("Camp not found")]
    NotFound,

    /// Non-2xx response; `message` is the API's `detail` when it sent one
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Submission rejected before it was sent
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl DirectoryError {
    /// Whether the same request may succeed if tried again.
    pub fn is_retryable(&self) -> bool {
        match self {
            DirectoryError::Network(_) => true,
            DirectoryError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DirectoryError::Parse(e.to_string())
        } else {
            DirectoryError::Network(e.to_string())
        }
    }
}
