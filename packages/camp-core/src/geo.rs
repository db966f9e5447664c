use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, Result};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated WGS84 position in decimal degrees.
///
/// Only [`Coordinates::new`] builds one, so every value is in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Build a position, rejecting non-finite or out-of-range components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Great-circle distance between two positions, for display.
///
/// Renders as whole meters below 1 km (`"450m"`) and as kilometers with one
/// decimal from 1 km up (`"3.2 km"`). The threshold applies to the rounded
/// meter value, so 999.6 m already shows as `"1.0 km"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn meters(&self) -> f64 {
        self.0
    }

    pub fn kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round();
        if rounded < 1000.0 {
            write!(f, "{}m", rounded as u64)
        } else {
            write!(f, "{:.1} km", self.kilometers())
        }
    }
}

/// Calculate distance between two coordinates in meters
///
/// Uses the haversine formula on a spherical Earth. Listings within a metro
/// search radius can be tens of kilometers apart, where a flat projection
/// visibly drifts.
pub fn haversine_meters(a: Coordinates, b: Coordinates) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (dlng / 2.0).sin().powi(2);
    // Rounding can push near-antipodal points just past 1
    let h = h.min(1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c * 1000.0
}

/// Distance from the observer to a target, or `None` when no observer
/// position is known. An unknown observer never yields `"0m"`.
pub fn distance(observer: Option<Coordinates>, target: Coordinates) -> Option<Distance> {
    observer.map(|from| Distance::from_meters(haversine_meters(from, target)))
}
