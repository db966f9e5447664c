use chrono::NaiveDateTime;
use serde::Serialize;

use crate::format::{format_time_range, schedule_label, DisplayRegion};
use crate::geo::{distance, Coordinates};
use crate::listing::Camp;
use crate::status::{status, CampStatus};

/// Everything a list view shows for one camp, derived fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampCard {
    pub id: String,
    pub title: String,
    pub address: String,
    pub status: CampStatus,
    pub status_label: &'static str,
    /// "Daily" tag
    pub daily: bool,
    /// "Verified" tag
    pub verified: bool,
    pub distance: Option<String>,
    pub schedule: String,
    pub hours: String,
}

impl CampCard {
    pub fn build(camp: &Camp, observer: Option<Coordinates>, now: NaiveDateTime) -> Self {
        Self::build_for_region(camp, observer, now, DisplayRegion::default())
    }

    pub fn build_for_region(
        camp: &Camp,
        observer: Option<Coordinates>,
        now: NaiveDateTime,
        region: DisplayRegion,
    ) -> Self {
        let status = status(camp, now);
        // A record with unusable coordinates gets no distance tag
        let distance_text = camp
            .coordinates()
            .ok()
            .and_then(|target| distance(observer, target))
            .map(|d| d.to_string());

        Self {
            id: camp.id.clone(),
            title: camp.title.clone(),
            address: camp.address.clone(),
            status,
            status_label: status.label(),
            daily: camp.is_recurring,
            verified: camp.is_verified(),
            distance: distance_text,
            schedule: schedule_label(camp, region),
            hours: format_time_range(camp.start_time, camp.end_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn langar() -> Camp {
        Camp {
            id: "langar-1".into(),
            title: "Bangla Sahib Langar".into(),
            description: None,
            address: "Ashoka Rd, New Delhi".into(),
            latitude: 28.6264,
            longitude: 77.2091,
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(13, 0, 0),
            organizer_name: Some("DSGMC".into()),
            organizer_phone: None,
            image_url: None,
            source: "gurudwara-directory".into(),
            is_active: true,
            is_recurring: true,
            created_at: String::new(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_recurring_card_with_observer() {
        // India Gate, roughly 2.5 km away
        let observer = Coordinates::new(28.6129, 77.2295).ok();
        let card = CampCard::build(&langar(), observer, now());

        assert_eq!(card.status, CampStatus::Active);
        assert_eq!(card.status_label, "Live");
        assert!(card.daily);
        assert!(card.verified);
        assert_eq!(card.schedule, "Every day");
        assert_eq!(card.hours, "9:00 AM - 1:00 PM");
        let distance = card.distance.unwrap();
        assert!(distance.ends_with(" km"), "got {distance}");
    }

    #[test]
    fn test_one_off_card_without_observer() {
        let mut camp = langar();
        camp.is_recurring = false;
        camp.source = "user".into();
        camp.date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        camp.end_time = None;

        let card = CampCard::build(&camp, None, now());

        assert_eq!(card.status, CampStatus::Upcoming);
        assert!(!card.daily);
        assert!(!card.verified);
        assert_eq!(card.distance, None);
        assert_eq!(card.schedule, "Tue, 20 Oct");
        assert_eq!(card.hours, "9:00 AM");
    }

    #[test]
    fn test_bad_coordinates_drop_distance_only() {
        let mut camp = langar();
        camp.latitude = 123.0;

        let card = CampCard::build(&camp, Coordinates::new(28.6, 77.2).ok(), now());

        assert_eq!(card.distance, None);
        assert_eq!(card.status, CampStatus::Active);
    }
}
