//! Error types for the geocoding client.

use thiserror::Error;

/// Result type for geocoding operations.
pub type Result<T> = std::result::Result<T, GeocodeError>;

/// Geocoding failures. All of them are user-visible and retryable.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network error (connection failed, timeout)
    #[error("Geocoding request failed: {0}")]
    Network(String),

    /// Provider answered with a non-2xx status (rate limit, bad request)
    #[error("Geocoding API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected format
    #[error("Failed to parse geocoding response: {0}")]
    Parse(String),

    /// Address search came back empty
    #[error("Location not found: {query}")]
    NoMatch { query: String },
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GeocodeError::Parse(e.to_string())
        } else {
            GeocodeError::Network(e.to_string())
        }
    }
}
