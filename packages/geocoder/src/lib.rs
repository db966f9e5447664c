//! Address lookup against Nominatim (OpenStreetMap).
//!
//! Forward search feeds the address and city pickers, reverse lookup names a
//! GPS fix. The provider is rate-limited and may answer slowly or not at
//! all, so callers go through the [`Geocoder`] trait and the
//! [`Autocomplete`] debouncer rather than firing a request per keystroke.
//!
//! # Example
//!
//! ```rust,ignore
//! use geocoder::{Geocoder, NominatimClient};
//!
//! let client = NominatimClient::new().with_country_codes(Some("in"));
//!
//! for s in client.search("Hazratganj Lucknow").await? {
//!     println!("{} ({}, {})", s.display_name, s.coordinates.latitude(), s.coordinates.longitude());
//! }
//! ```

pub mod autocomplete;
pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod types;

pub use autocomplete::{Autocomplete, AutocompleteConfig, SuggestionState};
pub use error::{GeocodeError, Result};
pub use types::Suggestion;

use std::time::Duration;

use async_trait::async_trait;
use camp_core::Coordinates;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use tracing::{debug, error, instrument, warn};
use types::{NominatimPlace, ReverseResponse};

const BASE_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_USER_AGENT: &str = "Bhandara/0.1 (free food camp finder)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shorter queries are answered with no suggestions and no request.
pub const MIN_SEARCH_CHARS: usize = 3;

/// Maximum suggestions requested per search.
pub const SEARCH_LIMIT: u8 = 5;

/// Forward and reverse address lookup.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Candidate places for a free-text address or place name.
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>>;

    /// Human-readable name for a position, if the provider knows one.
    async fn reverse(&self, coordinates: Coordinates) -> Result<Option<String>>;
}

/// Pure Nominatim REST client.
#[derive(Clone)]
pub struct NominatimClient {
    http_client: Client,
    base_url: String,
    user_agent: String,
    country_codes: Option<String>,
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NominatimClient {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            country_codes: None,
        }
    }

    /// Set a custom base URL (self-hosted Nominatim, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Nominatim's usage policy requires an identifying User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Restrict forward search to comma-separated ISO 3166-1 codes, e.g. `in`.
    pub fn with_country_codes(mut self, codes: Option<impl Into<String>>) -> Self {
        self.country_codes = codes.map(Into::into).filter(|c: &String| !c.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self, query: &str) -> String {
        let mut url = format!(
            "{}/search?q={}&format=json&limit={}",
            self.base_url,
            urlencoding::encode(query),
            SEARCH_LIMIT
        );
        if let Some(codes) = &self.country_codes {
            url.push_str("&countrycodes=");
            url.push_str(&urlencoding::encode(codes));
        }
        url
    }

    fn reverse_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/reverse?lat={}&lon={}&format=json",
            self.base_url, coordinates.latitude(), coordinates.longitude()
        )
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let resp = self
            .http_client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT_LANGUAGE, "en")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Geocoding API request failed");
                GeocodeError::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Geocoding API returned an error");
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp)
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_CHARS {
            return Ok(Vec::new());
        }

        debug!("Geocoding address: {}", query);

        let places: Vec<NominatimPlace> = self.get(&self.search_url(query)).await?.json().await?;

        let suggestions: Vec<Suggestion> = places
            .into_iter()
            .filter_map(|place| match Suggestion::try_from(place) {
                Ok(s) => Some(s),
                Err(reason) => {
                    warn!(%reason, "Skipping geocoding result");
                    None
                }
            })
            .collect();

        debug!(count = suggestions.len(), "Geocoded {}", query);
        Ok(suggestions)
    }

    #[instrument(skip(self))]
    async fn reverse(&self, coordinates: Coordinates) -> Result<Option<String>> {
        let resp: ReverseResponse = self.get(&self.reverse_url(coordinates)).await?.json().await?;

        if let Some(reason) = &resp.error {
            debug!(%reason, "Reverse geocoding found no place");
        }
        Ok(resp.display_name.filter(|name| !name.trim().is_empty()))
    }
}

/// Resolve a typed address to its best match.
///
/// Used when a form is submitted without picking a suggestion.
pub async fn resolve_address<G>(geocoder: &G, address: &str) -> Result<Suggestion>
where
    G: Geocoder + ?Sized,
{
    let results = geocoder.search(address).await?;
    results.into_iter().next().ok_or_else(|| {
        warn!(address = %address, "Location not found by geocoding API");
        GeocodeError::NoMatch {
            query: address.trim().to_string(),
        }
    })
}
