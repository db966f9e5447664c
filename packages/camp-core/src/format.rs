//! Short date/time strings for camp cards and detail pages.

use chrono::{NaiveDate, NaiveTime};

use crate::listing::Camp;

/// Regional ordering for short dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayRegion {
    /// `Mon, 19 Oct`
    #[default]
    India,
    /// `Mon, Oct 19`
    UnitedStates,
}

/// Render a stored date as weekday, day and month.
pub fn format_date(date: NaiveDate, region: DisplayRegion) -> String {
    let pattern = match region {
        DisplayRegion::India => "%a, %-d %b",
        DisplayRegion::UnitedStates => "%a, %b %-d",
    };
    date.format(pattern).to_string()
}

/// Convert 24-hour time to 12-hour format, e.g. `13:05` to `1:05 PM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// `9:00 AM - 1:00 PM`, or just the start when there is no end time.
pub fn format_time_range(start: NaiveTime, end: Option<NaiveTime>) -> String {
    match end {
        Some(end) => format!("{} - {}", format_time(start), format_time(end)),
        None => format_time(start),
    }
}

/// Day line of a camp card: `Every day` for recurring camps, otherwise the date.
pub fn schedule_label(camp: &Camp, region: DisplayRegion) -> String {
    if camp.is_recurring {
        "Every day".to_string()
    } else {
        format_date(camp.date, region)
    }
}
