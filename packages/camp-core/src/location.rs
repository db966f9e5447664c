//! Observer place: where distances are measured from.

use serde::Serialize;
use thiserror::Error;

use crate::geo::Coordinates;

/// Fallback name when reverse geocoding finds nothing.
pub const UNNAMED_PLACE: &str = "Your Location";

/// A named observer position, either from device GPS or a picked place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObserverPlace {
    pub name: String,
    pub coordinates: Coordinates,
}

impl ObserverPlace {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Name a GPS fix from a reverse-geocoded display name, if any.
    pub fn from_reverse(display_name: Option<&str>, coordinates: Coordinates) -> Self {
        let name = display_name
            .map(short_place_name)
            .unwrap_or_else(|| UNNAMED_PLACE.to_string());
        Self::new(name, coordinates)
    }
}

/// First two comma-separated parts of a geocoder display name.
///
/// `"Andheri West, Mumbai, Maharashtra, India"` becomes `"Andheri West, Mumbai"`.
pub fn short_place_name(display_name: &str) -> String {
    let short = display_name
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .take(2)
        .collect::<Vec<_>>()
        .join(", ");

    if short.is_empty() {
        UNNAMED_PLACE.to_string()
    } else {
        short
    }
}

/// First comma-separated part of a geocoder display name.
pub fn primary_place_name(display_name: &str) -> String {
    display_name
        .split(',')
        .map(str::trim)
        .find(|part| !part.is_empty())
        .unwrap_or(display_name)
        .to_string()
}

/// Why no observer position could be obtained. User-visible and retryable.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LocationError {
    /// Neither a position nor a place to search around was given
    #[error("Location information unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_place_name() {
        assert_eq!(
            short_place_name("Andheri West, Mumbai, Maharashtra, 400058, India"),
            "Andheri West, Mumbai"
        );
        assert_eq!(short_place_name("Pune"), "Pune");
        assert_eq!(short_place_name(" , "), UNNAMED_PLACE);
    }

    #[test]
    fn test_primary_place_name() {
        assert_eq!(primary_place_name("Lucknow, Uttar Pradesh, India"), "Lucknow");
        assert_eq!(primary_place_name(""), "");
    }

    #[test]
    fn test_from_reverse() {
        let coords = Coordinates::new(26.8467, 80.9462).unwrap();

        let named = ObserverPlace::from_reverse(Some("Hazratganj, Lucknow, India"), coords);
        assert_eq!(named.name, "Hazratganj, Lucknow");

        let unnamed = ObserverPlace::from_reverse(None, coords);
        assert_eq!(unnamed.name, UNNAMED_PLACE);
        assert_eq!(unnamed.coordinates, coords);
    }

    #[test]
    fn test_location_messages() {
        assert_eq!(
            LocationError::Unavailable.to_string(),
            "Location information unavailable"
        );
    }
}
