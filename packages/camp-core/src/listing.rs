//! Camp listing model as returned by the listing directory.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::geo::Coordinates;

/// Source value for camps submitted by members of the public.
pub const USER_SOURCE: &str = "user";

/// A free food camp (bhandara) listing.
///
/// `date` only matters for one-off camps; a recurring camp runs every day in
/// the same `start_time`..`end_time` window. Times are local wall-clock
/// `HH:MM` values and never wrap past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camp {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(default, with = "hhmm_opt")]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub organizer_name: Option<String>,
    #[serde(default)]
    pub organizer_phone: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub created_at: String,
}

fn default_source() -> String {
    USER_SOURCE.to_string()
}

fn default_true() -> bool {
    true
}

impl Camp {
    pub fn coordinates(&self) -> Result<Coordinates> {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Camps imported from curated sources rather than user submissions.
    pub fn is_verified(&self) -> bool {
        self.source != USER_SOURCE
    }

    /// Google Maps turn-by-turn link to the camp.
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            self.latitude, self.longitude
        )
    }

    /// Public page for this camp under the given site origin.
    pub fn share_url(&self, origin: &str) -> String {
        format!("{}/camp/{}", origin.trim_end_matches('/'), self.id)
    }

    pub fn share_text(&self) -> String {
        format!("{}: free food at {}", self.title, self.address)
    }
}

/// One page of camps plus the total match count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampPage {
    pub camps: Vec<Camp>,
    pub total: u64,
}

impl CampPage {
    pub fn total_pages(&self, limit: u32) -> u64 {
        if limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(limit))
    }
}

/// Parse a 24-hour `HH:MM` time of day. A trailing `:SS` is tolerated and
/// dropped since camps are scheduled to the minute.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map(truncate_to_minute)
        .map_err(|_| CoreError::InvalidTime(value.to_string()))
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(value.to_string()))
}

pub(crate) fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    use chrono::Timelike;
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw).map_err(D::Error::custom)
    }
}

mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_some(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            // Older records store an empty string for "no end time"
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_time_of_day(&raw)
                .map(Some)
                .map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMP_JSON: &str = r#"{
        "id": "65f1c0ffee",
        "title": "Gurudwara Langar",
        "description": "Dal, roti and kheer",
        "address": "Bangla Sahib Rd, New Delhi",
        "latitude": 28.6264,
        "longitude": 77.2091,
        "date": "2026-10-19",
        "start_time": "09:00",
        "end_time": "13:00",
        "organizer_name": null,
        "source": "gurudwara-directory",
        "is_active": true,
        "is_recurring": true,
        "created_at": "2026-10-01T08:00:00"
    }"#;

    #[test]
    fn test_deserialize_directory_record() {
        let camp: Camp = serde_json::from_str(CAMP_JSON).unwrap();

        assert_eq!(camp.id, "65f1c0ffee");
        assert_eq!(camp.date, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(camp.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(camp.end_time, NaiveTime::from_hms_opt(13, 0, 0));
        assert_eq!(camp.organizer_name, None);
        assert_eq!(camp.organizer_phone, None);
        assert!(camp.is_recurring);
        assert!(camp.is_verified());
    }

    #[test]
    fn test_missing_optionals_take_defaults() {
        let camp: Camp = serde_json::from_str(
            r#"{
                "id": "a1",
                "title": "Bhandara",
                "address": "Hanuman Mandir, Connaught Place",
                "latitude": 28.6304,
                "longitude": 77.2177,
                "date": "2026-10-20",
                "start_time": "18:00",
                "end_time": ""
            }"#,
        )
        .unwrap();

        assert_eq!(camp.end_time, None);
        assert_eq!(camp.source, USER_SOURCE);
        assert!(camp.is_active);
        assert!(!camp.is_recurring);
        assert!(!camp.is_verified());
        assert_eq!(camp.created_at, "");
    }

    #[test]
    fn test_rejects_malformed_time() {
        let bad = CAMP_JSON.replace(r#""start_time": "09:00""#, r#""start_time": "9am""#);
        assert!(serde_json::from_str::<Camp>(&bad).is_err());
    }

    #[test]
    fn test_times_serialize_as_hhmm() {
        let camp: Camp = serde_json::from_str(CAMP_JSON).unwrap();
        let value = serde_json::to_value(&camp).unwrap();

        assert_eq!(value["start_time"], "09:00");
        assert_eq!(value["end_time"], "13:00");
        assert_eq!(value["date"], "2026-10-19");
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(
            parse_time_of_day("07:45").unwrap(),
            NaiveTime::from_hms_opt(7, 45, 0).unwrap()
        );
        assert_eq!(
            parse_time_of_day("07:45:30").unwrap(),
            NaiveTime::from_hms_opt(7, 45, 0).unwrap()
        );
        assert_eq!(
            parse_time_of_day("25:00"),
            Err(CoreError::InvalidTime("25:00".into()))
        );
        assert!(parse_date("2026-02-30").is_err());
    }

    #[test]
    fn test_links() {
        let camp: Camp = serde_json::from_str(CAMP_JSON).unwrap();

        assert_eq!(
            camp.directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=28.6264,77.2091"
        );
        assert_eq!(
            camp.share_url("https://bhandara.app/"),
            "https://bhandara.app/camp/65f1c0ffee"
        );
        assert_eq!(
            camp.share_text(),
            "Gurudwara Langar: free food at Bangla Sahib Rd, New Delhi"
        );
    }

    #[test]
    fn test_total_pages() {
        let page = CampPage {
            camps: vec![],
            total: 41,
        };
        assert_eq!(page.total_pages(20), 3);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(CampPage::default().total_pages(20), 0);
    }
}
