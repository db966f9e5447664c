//! Error types for camp-core.

use thiserror::Error;

/// Result type for camp-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while building core values from untrusted input.
///
/// Classification and formatting are total; only the constructors that
/// accept raw numbers or strings can fail.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Latitude outside [-90, 90] or not finite
    #[error("invalid latitude: {0}")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] or not finite
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),

    /// Time of day not in `HH:MM` form
    #[error("invalid time of day: {0}")]
    InvalidTime(String),

    /// Calendar date not in `YYYY-MM-DD` form
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
