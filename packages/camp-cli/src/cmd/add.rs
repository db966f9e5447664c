//! Submit a new camp

use anyhow::{Context, Result};
use camp_core::listing::{parse_date, parse_time_of_day};
use camp_core::Coordinates;
use camp_directory::{NewCamp, ValidationError};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;
use geocoder::{resolve_address, GeocodeError, Geocoder};
use tracing::warn;

use crate::context::AppContext;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Camp name
    #[arg(long)]
    pub title: String,

    /// Street address; filled from --lat/--lng when omitted
    #[arg(long)]
    pub address: Option<String>,

    /// Date (YYYY-MM-DD); not needed with --recurring
    #[arg(long, value_parser = date_arg)]
    pub date: Option<NaiveDate>,

    /// Start time (HH:MM, 24-hour)
    #[arg(long, value_parser = time_arg)]
    pub start: Option<NaiveTime>,

    /// End time (HH:MM, 24-hour)
    #[arg(long, value_parser = time_arg)]
    pub end: Option<NaiveTime>,

    /// Runs every day in the same window
    #[arg(long)]
    pub recurring: bool,

    #[arg(long)]
    pub description: Option<String>,

    /// Organizer name
    #[arg(long)]
    pub organizer: Option<String>,

    /// Organizer phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Latitude of the camp (skips address lookup)
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the camp
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,
}

fn date_arg(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn time_arg(value: &str) -> std::result::Result<NaiveTime, String> {
    parse_time_of_day(value).map_err(|e| e.to_string())
}

pub async fn run(ctx: &AppContext, args: AddArgs) -> Result<()> {
    let location = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)?),
        _ => None,
    };

    let mut camp = NewCamp {
        title: args.title,
        address: args.address.unwrap_or_default(),
        location,
        date: args.date,
        start_time: args.start,
        end_time: args.end,
        description: args.description,
        organizer_name: args.organizer,
        organizer_phone: args.phone,
        is_recurring: args.recurring,
    };

    if let Some(found) = locate(ctx.geocoder.as_ref(), &mut camp).await? {
        ctx.print_info(&format!("Located at {}", found));
    }

    let created = ctx
        .directory
        .create_camp(&camp, Local::now().date_naive())
        .await
        .context("Failed to create camp")?;

    ctx.print_success(&format!("Camp \"{}\" added!", created.title));
    println!("  id: {}", created.id);
    Ok(())
}

/// Fill in whichever of address and position is missing, then validate.
///
/// A pinned position names an empty address by reverse lookup. A typed
/// address without a position takes the first geocoder match, whose name is
/// returned.
async fn locate<G>(geocoder: &G, camp: &mut NewCamp) -> Result<Option<String>>
where
    G: Geocoder + ?Sized,
{
    if let (true, Some(coordinates)) = (camp.address.trim().is_empty(), camp.location) {
        match geocoder.reverse(coordinates).await {
            Ok(Some(name)) => camp.address = name,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Reverse geocoding failed"),
        }
    }

    match camp.validate() {
        Ok(()) => Ok(None),
        Err(ValidationError::LocationUnresolved) => {
            let found = match resolve_address(geocoder, &camp.address).await {
                Ok(found) => found,
                Err(GeocodeError::NoMatch { .. }) => {
                    return Err(ValidationError::LocationUnresolved.into())
                }
                Err(e) => return Err(e).context("Address lookup failed"),
            };
            camp.location = Some(found.coordinates);
            Ok(Some(found.display_name))
        }
        Err(e) => Err(e.into()),
    }
}
