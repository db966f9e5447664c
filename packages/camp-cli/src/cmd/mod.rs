//! Subcommands and the observer-location arguments they share

pub mod add;
pub mod health;
pub mod lookup;
pub mod nearby;
pub mod show;

use anyhow::{Context, Result};
use camp_core::{Coordinates, LocationError, ObserverPlace};
use clap::Args;
use geocoder::{resolve_address, Geocoder};
use tracing::warn;

/// Where to measure distances from
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Place name or address to search around
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub near: Option<String>,

    /// Latitude of your position
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of your position
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,
}

impl LocationArgs {
    pub fn is_empty(&self) -> bool {
        self.near.is_none() && self.lat.is_none() && self.lng.is_none()
    }
}

/// Resolve the observer, or fail with a user-facing location error.
pub async fn resolve_place<G>(geocoder: &G, args: &LocationArgs) -> Result<ObserverPlace>
where
    G: Geocoder + ?Sized,
{
    resolve_optional_place(geocoder, args)
        .await?
        .ok_or(LocationError::Unavailable)
        .context("Pass --near <place> or --lat/--lng to search around a position")
}

pub async fn resolve_optional_place<G>(
    geocoder: &G,
    args: &LocationArgs,
) -> Result<Option<ObserverPlace>>
where
    G: Geocoder + ?Sized,
{
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let coordinates = Coordinates::new(lat, lng)?;
        // A missing name is cosmetic; keep going with the fallback
        let name = match geocoder.reverse(coordinates).await {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed");
                None
            }
        };
        return Ok(Some(ObserverPlace::from_reverse(name.as_deref(), coordinates)));
    }

    if let Some(near) = &args.near {
        let suggestion = resolve_address(geocoder, near)
            .await
            .with_context(|| format!("Could not find \"{}\"", near.trim()))?;
        return Ok(Some(suggestion.into_observer_place()));
    }

    Ok(None)
}
