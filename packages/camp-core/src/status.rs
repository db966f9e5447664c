//! Live/upcoming classification of a camp against an explicit `now`.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::listing::{truncate_to_minute, Camp};

/// Display status of a camp.
///
/// There is no separate "ended" state: a one-off camp whose date has passed
/// reports `Upcoming`, and badge rendering relies on exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampStatus {
    Active,
    Upcoming,
}

impl CampStatus {
    /// Badge text shown on a camp card.
    pub fn label(&self) -> &'static str {
        match self {
            CampStatus::Active => "Live",
            CampStatus::Upcoming => "Upcoming",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CampStatus::Active)
    }
}

/// Classify a camp at the observer's local wall-clock `now`.
///
/// Time of day is compared to the minute. The window is inclusive at
/// `start_time` and stays `Active` through the whole `end_time` minute.
pub fn status(camp: &Camp, now: NaiveDateTime) -> CampStatus {
    if !camp.is_recurring {
        let today = now.date();
        if camp.date != today {
            // Past and future one-off camps both read as upcoming
            return CampStatus::Upcoming;
        }
    }

    classify_time_of_day(
        truncate_to_minute(now.time()),
        camp.start_time,
        camp.end_time,
    )
}

fn classify_time_of_day(
    now: NaiveTime,
    start: NaiveTime,
    end: Option<NaiveTime>,
) -> CampStatus {
    if let Some(end) = end {
        if now > end {
            return CampStatus::Upcoming;
        }
    }
    if now >= start {
        CampStatus::Active
    } else {
        CampStatus::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn at(date: NaiveDate, hhmm: &str) -> NaiveDateTime {
        let time = NaiveTime::parse_from_str(hhmm, "%H:%M").unwrap();
        date.and_time(time)
    }

    fn camp(date: NaiveDate, start: &str, end: Option<&str>, recurring: bool) -> Camp {
        Camp {
            id: "c1".into(),
            title: "Sai Bhandara".into(),
            description: None,
            address: "Shirdi Sai Mandir, Andheri West".into(),
            latitude: 19.1364,
            longitude: 72.8296,
            date,
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: end.map(|e| NaiveTime::parse_from_str(e, "%H:%M").unwrap()),
            organizer_name: None,
            organizer_phone: None,
            image_url: None,
            source: "user".into(),
            is_active: true,
            is_recurring: recurring,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_recurring_window_boundaries() {
        // Stored date is ignored for recurring camps
        let c = camp(today() - Duration::days(30), "09:00", Some("13:00"), true);

        assert_eq!(status(&c, at(today(), "08:59")), CampStatus::Upcoming);
        assert_eq!(status(&c, at(today(), "09:00")), CampStatus::Active);
        assert_eq!(status(&c, at(today(), "13:00")), CampStatus::Active);
        assert_eq!(status(&c, at(today(), "13:01")), CampStatus::Upcoming);
    }

    #[test]
    fn test_seconds_within_end_minute_stay_active() {
        let c = camp(today(), "09:00", Some("13:00"), true);
        let now = today().and_hms_opt(13, 0, 59).unwrap();

        assert_eq!(status(&c, now), CampStatus::Active);
    }

    #[test]
    fn test_recurring_without_end_runs_until_midnight() {
        let c = camp(today(), "18:00", None, true);

        assert_eq!(status(&c, at(today(), "17:59")), CampStatus::Upcoming);
        assert_eq!(status(&c, at(today(), "23:59")), CampStatus::Active);
        assert_eq!(status(&c, at(today(), "00:00")), CampStatus::Upcoming);
    }

    #[test]
    fn test_one_off_tomorrow_is_upcoming_all_day() {
        let c = camp(today() + Duration::days(1), "00:00", None, false);

        for hhmm in ["00:00", "09:00", "12:00", "23:59"] {
            assert_eq!(status(&c, at(today(), hhmm)), CampStatus::Upcoming);
        }
    }

    #[test]
    fn test_one_off_today_after_start() {
        let c = camp(today(), "18:00", None, false);

        assert_eq!(status(&c, at(today(), "19:00")), CampStatus::Active);
        assert_eq!(status(&c, at(today(), "17:00")), CampStatus::Upcoming);
    }

    #[test]
    fn test_one_off_today_after_end() {
        let c = camp(today(), "12:00", Some("15:00"), false);

        assert_eq!(status(&c, at(today(), "15:30")), CampStatus::Upcoming);
    }

    #[test]
    fn test_one_off_yesterday_reads_upcoming() {
        let c = camp(today() - Duration::days(1), "09:00", Some("13:00"), false);

        assert_eq!(status(&c, at(today(), "10:00")), CampStatus::Upcoming);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CampStatus::Active.label(), "Live");
        assert_eq!(CampStatus::Upcoming.label(), "Upcoming");
        assert_eq!(
            serde_json::to_string(&CampStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
