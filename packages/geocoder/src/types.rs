use camp_core::{primary_place_name, Coordinates, ObserverPlace};
use serde::Deserialize;

/// Nominatim `/search` result entry. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

/// Nominatim `/reverse` response. `display_name` is absent when the point
/// cannot be geocoded (the body then carries an `error` field instead).
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseResponse {
    pub display_name: Option<String>,
    pub error: Option<String>,
}

/// A forward-geocoding hit offered to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub display_name: String,
    pub coordinates: Coordinates,
}

impl Suggestion {
    pub fn new(display_name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            display_name: display_name.into(),
            coordinates,
        }
    }

    /// Leading component, e.g. `Lucknow` for a city pick.
    pub fn place_name(&self) -> String {
        primary_place_name(&self.display_name)
    }

    pub fn into_observer_place(self) -> ObserverPlace {
        let name = self.place_name();
        ObserverPlace::new(name, self.coordinates)
    }
}

impl TryFrom<NominatimPlace> for Suggestion {
    type Error = String;

    fn try_from(place: NominatimPlace) -> Result<Self, Self::Error> {
        let lat: f64 = place
            .lat
            .parse()
            .map_err(|e| format!("Invalid latitude in response: {}", e))?;
        let lng: f64 = place
            .lon
            .parse()
            .map_err(|e| format!("Invalid longitude in response: {}", e))?;
        let coordinates = Coordinates::new(lat, lng).map_err(|e| e.to_string())?;

        Ok(Self {
            display_name: place.display_name,
            coordinates,
        })
    }
}
