use anyhow::{Context, Result};
use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub nominatim_url: String,
    pub geocoder_user_agent: String,
    /// Comma-separated ISO country codes for address search; `None` searches worldwide
    pub country_codes: Option<String>,
    pub radius_km: f64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let radius_km: f64 = lookup("BHANDARA_RADIUS_KM")
            .unwrap_or_else(|| "80".to_string())
            .parse()
            .context("BHANDARA_RADIUS_KM must be a number")?;
        anyhow::ensure!(
            radius_km > 0.0 && radius_km <= 500.0,
            "BHANDARA_RADIUS_KM must be between 0 and 500, got {}",
            radius_km
        );

        Ok(Self {
            api_url: lookup("BHANDARA_API_URL")
                .unwrap_or_else(|| "http://localhost:8000".to_string()),
            nominatim_url: lookup("NOMINATIM_URL")
                .unwrap_or_else(|| "https://nominatim.openstreetmap.org".to_string()),
            geocoder_user_agent: lookup("GEOCODER_USER_AGENT")
                .unwrap_or_else(|| "Bhandara/0.1 (free food camp finder)".to_string()),
            country_codes: match lookup("GEOCODER_COUNTRY_CODES") {
                Some(codes) if codes.trim().is_empty() => None,
                Some(codes) => Some(codes),
                None => Some("in".to_string()),
            },
            radius_km,
        })
    }
}
