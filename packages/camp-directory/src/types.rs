use camp_core::{Coordinates, ObserverPlace};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

/// Search radius used when browsing camps around a place.
pub const DEFAULT_RADIUS_KM: f64 = 80.0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Parameters for `GET /api/camps`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCampsQuery {
    pub near: Option<Coordinates>,
    pub radius_km: Option<f64>,
    pub city: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for ListCampsQuery {
    fn default() -> Self {
        Self {
            near: None,
            radius_km: Some(DEFAULT_RADIUS_KM),
            city: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListCampsQuery {
    /// Camps around a selected place, first page.
    pub fn around(place: &ObserverPlace) -> Self {
        Self {
            near: Some(place.coordinates),
            city: Some(place.name.clone()),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Query string pairs; unset or empty filters are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(near) = self.near {
            pairs.push(("lat", near.latitude().to_string()));
            pairs.push(("lng", near.longitude().to_string()));
        }
        if let Some(radius) = self.radius_km.filter(|r| *r > 0.0) {
            pairs.push(("radius_km", radius.to_string()));
        }
        if let Some(city) = self.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            pairs.push(("city", city.to_string()));
        }
        if self.page > 0 {
            pairs.push(("page", self.page.to_string()));
        }
        if self.limit > 0 {
            pairs.push(("limit", self.limit.to_string()));
        }
        pairs
    }
}

/// Why a camp submission was rejected before sending.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Camp name is required")]
    TitleRequired,

    #[error("Address is required")]
    AddressRequired,

    #[error("Date is required")]
    DateRequired,

    #[error("Start time is required")]
    StartTimeRequired,

    #[error("End time must be after start time")]
    EndBeforeStart,

    #[error("Could not find that location. Please pick from suggestions or use current location.")]
    LocationUnresolved,
}

impl ValidationError {
    /// Form field the message belongs to; `None` for form-level errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::TitleRequired => Some("title"),
            ValidationError::AddressRequired => Some("address"),
            ValidationError::DateRequired => Some("date"),
            ValidationError::StartTimeRequired => Some("start_time"),
            ValidationError::EndBeforeStart => Some("end_time"),
            ValidationError::LocationUnresolved => None,
        }
    }
}

/// A camp submission for `POST /api/camps`.
///
/// Images are not uploaded from here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCamp {
    pub title: String,
    pub address: String,
    /// Picked suggestion or GPS fix for `address`
    pub location: Option<Coordinates>,
    /// Ignored for recurring camps
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub description: Option<String>,
    pub organizer_name: Option<String>,
    pub organizer_phone: Option<String>,
    pub is_recurring: bool,
}

impl NewCamp {
    /// Checks in the order the form reports them; the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::AddressRequired);
        }
        if !self.is_recurring && self.date.is_none() {
            return Err(ValidationError::DateRequired);
        }
        let start = self.start_time.ok_or(ValidationError::StartTimeRequired)?;
        if let Some(end) = self.end_time {
            if end <= start {
                return Err(ValidationError::EndBeforeStart);
            }
        }
        if self.location.is_none() {
            return Err(ValidationError::LocationUnresolved);
        }
        Ok(())
    }

    /// Multipart text fields, trimmed, with empty optionals omitted.
    ///
    /// Recurring camps are stamped with `today`.
    pub fn form_fields(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<(&'static str, String)>, ValidationError> {
        self.validate()?;

        let (Some(start), Some(location)) = (self.start_time, self.location) else {
            return Err(ValidationError::StartTimeRequired);
        };
        let date = if self.is_recurring {
            today
        } else {
            self.date.ok_or(ValidationError::DateRequired)?
        };

        let mut fields = vec![
            ("title", self.title.trim().to_string()),
            ("address", self.address.trim().to_string()),
            ("date", date.format("%Y-%m-%d").to_string()),
            ("start_time", start.format("%H:%M").to_string()),
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("is_recurring", self.is_recurring.to_string()),
        ];
        if let Some(end) = self.end_time {
            fields.push(("end_time", end.format("%H:%M").to_string()));
        }
        let optional = [
            ("description", &self.description),
            ("organizer_name", &self.organizer_name),
            ("organizer_phone", &self.organizer_phone),
        ];
        for (name, value) in optional {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                fields.push((name, value.to_string()));
            }
        }
        Ok(fields)
    }
}

/// `GET /api/health` response.
#[derive(Debug, Deserialize)]
pub(crate) struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Error body shape of the directory API. `detail` is a string for
/// handled errors and a list of field problems for request validation.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

/// Best human-readable message from an error response body.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);
    match detail {
        Some(serde_json::Value::String(message)) => message,
        Some(other) => other.to_string(),
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => fallback.to_string(),
    }
}
