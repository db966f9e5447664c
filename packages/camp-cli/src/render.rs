//! Terminal rendering of camp cards and suggestions

use camp_core::{Camp, CampCard};
use colored::{ColoredString, Colorize};
use geocoder::SuggestionState;

fn badge(card: &CampCard) -> ColoredString {
    let text = format!(" {} ", card.status_label);
    if card.status.is_active() {
        text.black().on_green().bold()
    } else {
        text.blue()
    }
}

/// Tag line: Daily, Verified and distance, in card order.
pub fn tags(card: &CampCard) -> Vec<String> {
    let mut tags = Vec::new();
    if card.daily {
        tags.push("Daily".to_string());
    }
    if card.verified {
        tags.push("Verified".to_string());
    }
    if let Some(distance) = &card.distance {
        tags.push(distance.clone());
    }
    tags
}

pub fn print_card(card: &CampCard) {
    let title = if card.status.is_active() {
        card.title.green().bold()
    } else {
        card.title.bold()
    };
    println!("{}  {}", title, badge(card));

    let tags = tags(card);
    if !tags.is_empty() {
        println!("  {}", tags.join(" · ").yellow());
    }
    println!("  {}", card.address);
    println!("  {}  {}", card.schedule, card.hours);
    println!("  {}", format!("id: {}", card.id).dimmed());
}

pub fn print_camp_details(camp: &Camp, card: &CampCard) {
    print_card(card);
    println!();

    if let Some(description) = camp.description.as_deref().filter(|d| !d.trim().is_empty()) {
        println!("{}", description);
        println!();
    }

    for (label, value) in detail_rows(camp, card) {
        println!("{:<11} {}", label.bold(), value);
    }
    println!();
    println!("{}", camp.share_text().dimmed());
}

/// Labeled rows under the card on the detail page.
pub fn detail_rows(camp: &Camp, card: &CampCard) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("When:", card.schedule.clone()),
        ("Hours:", card.hours.clone()),
    ];
    if let Some(name) = &camp.organizer_name {
        rows.push(("Organizer:", name.clone()));
    }
    if let Some(phone) = &camp.organizer_phone {
        rows.push(("Phone:", phone.clone()));
    }
    rows.push(("Directions:", camp.directions_url()));
    rows
}

pub fn print_suggestions(state: &SuggestionState) {
    println!("{} {}", "›".cyan(), state.query.bold());
    if state.suggestions.is_empty() {
        println!("  {}", "(no suggestions)".dimmed());
        return;
    }
    for (i, s) in state.suggestions.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            s.display_name,
            format!(
                "({:.4}, {:.4})",
                s.coordinates.latitude(), s.coordinates.longitude()
            )
            .dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camp_core::CampStatus;
    use chrono::{NaiveDate, NaiveTime};

    fn card() -> CampCard {
        CampCard {
            id: "c9".into(),
            title: "Chhath Prasad".into(),
            address: "Gandhi Ghat, Patna".into(),
            status: CampStatus::Upcoming,
            status_label: "Upcoming",
            daily: false,
            verified: true,
            distance: Some("3.2 km".into()),
            schedule: "Tue, 20 Oct".into(),
            hours: "6:00 AM".into(),
        }
    }

    fn camp() -> Camp {
        Camp {
            id: "c9".into(),
            title: "Chhath Prasad".into(),
            description: None,
            address: "Gandhi Ghat, Patna".into(),
            latitude: 25.6207,
            longitude: 85.1694,
            date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            end_time: None,
            organizer_name: None,
            organizer_phone: Some("+91 612 000 0000".into()),
            image_url: None,
            source: "user".into(),
            is_active: true,
            is_recurring: false,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_detail_rows_reuse_card_text() {
        let mut c = card();
        c.schedule = "Tue, Oct 20".into();

        let rows = detail_rows(&camp(), &c);

        assert_eq!(
            rows,
            vec![
                ("When:", "Tue, Oct 20".to_string()),
                ("Hours:", "6:00 AM".to_string()),
                ("Phone:", "+91 612 000 0000".to_string()),
                (
                    "Directions:",
                    "https://www.google.com/maps/dir/?api=1&destination=25.6207,85.1694"
                        .to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_tags_follow_card_order() {
        let mut c = card();
        assert_eq!(tags(&c), vec!["Verified", "3.2 km"]);

        c.daily = true;
        c.distance = None;
        assert_eq!(tags(&c), vec!["Daily", "Verified"]);
    }
}
