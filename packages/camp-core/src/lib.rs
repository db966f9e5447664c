//! Camp listing core.
//!
//! Pure, synchronous building blocks shared by every Bhandara front end:
//! the camp model, great-circle distance, live/upcoming classification and
//! the short date/time strings shown on a camp card.
//!
//! Nothing here reads the system clock. Callers pass `now` explicitly and
//! supply the real clock only at the outermost call site.
//!
//! # Example
//!
//! ```rust,ignore
//! use camp_core::{CampCard, Coordinates};
//!
//! let observer = Coordinates::new(19.0825, 72.8811)?;
//! let now = chrono::Local::now().naive_local();
//!
//! let card = CampCard::build(&camp, Some(observer), now);
//! println!("{} {}", card.status_label, card.distance.unwrap_or_default());
//! ```

pub mod card;
pub mod error;
pub mod format;
pub mod geo;
pub mod listing;
pub mod location;
pub mod status;

pub use card::CampCard;
pub use error::{CoreError, Result};
pub use format::{
    format_date, format_time, format_time_range, schedule_label, DisplayRegion,
};
pub use geo::{distance, haversine_meters, Coordinates, Distance};
pub use listing::{Camp, CampPage};
pub use location::{primary_place_name, short_place_name, LocationError, ObserverPlace};
pub use status::{status, CampStatus};
