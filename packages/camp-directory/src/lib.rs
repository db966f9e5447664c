//! Pure REST client for the camp listing directory.
//!
//! Covers browsing camps around a place, fetching one camp and submitting a
//! new one. Listing storage, search radius filtering and image handling all
//! live behind the API.
//!
//! # Example
//!
//! ```rust,ignore
//! use camp_directory::{DirectoryClient, ListCampsQuery};
//!
//! let client = DirectoryClient::new("https://api.bhandara.app")?;
//!
//! let page = client.list_camps(&ListCampsQuery::around(&place)).await?;
//! println!("{} camps near {}", page.total, place.name);
//! ```

pub mod error;
pub mod types;

pub use error::{DirectoryError, Result};
pub use types::{ListCampsQuery, NewCamp, ValidationError, DEFAULT_PAGE_SIZE, DEFAULT_RADIUS_KM};

use camp_core::{Camp, CampPage};
use chrono::NaiveDate;
use reqwest::multipart::Form;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};
use types::HealthResponse;

/// Camp directory API client.
#[derive(Clone)]
pub struct DirectoryClient {
    http_client: Client,
    base_url: String,
}

impl DirectoryClient {
    /// Client for the directory at `base_url`, which must be an http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(DirectoryError::Config(format!(
                "directory base URL must be http(s), got {}",
                base_url
            )));
        }
        Ok(Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn camps_url(&self) -> String {
        format!("{}/api/camps", self.base_url)
    }

    fn camp_url(&self, id: &str) -> String {
        format!("{}/{}", self.camps_url(), urlencoding::encode(id))
    }

    /// Map a non-2xx response to an error carrying the API's `detail`.
    async fn check(resp: reqwest::Response, fallback: &str) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(Self::api_error(status, &body, fallback))
    }

    fn api_error(status: StatusCode, body: &str, fallback: &str) -> DirectoryError {
        let message = types::error_message(body, fallback);
        warn!(status = status.as_u16(), %message, "Directory API returned an error");
        DirectoryError::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// One page of camps matching the query.
    #[instrument(skip(self))]
    pub async fn list_camps(&self, query: &ListCampsQuery) -> Result<CampPage> {
        let resp = self
            .http_client
            .get(self.camps_url())
            .query(&query.query_pairs())
            .send()
            .await?;

        let page: CampPage = Self::check(resp, "Failed to fetch camps")
            .await?
            .json()
            .await?;
        debug!(count = page.camps.len(), total = page.total, "Fetched camps");
        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn get_camp(&self, id: &str) -> Result<Camp> {
        if id.trim().is_empty() {
            return Err(DirectoryError::NotFound);
        }

        let resp = self.http_client.get(self.camp_url(id)).send().await?;
        // Only a 404 here means the camp itself is unknown
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound);
        }

        let camp: Camp = Self::check(resp, "Failed to fetch camp").await?.json().await?;
        Ok(camp)
    }

    /// Validate and submit a new camp. Recurring camps are dated `today`.
    #[instrument(skip(self, camp), fields(title = %camp.title))]
    pub async fn create_camp(&self, camp: &NewCamp, today: NaiveDate) -> Result<Camp> {
        let fields = camp.form_fields(today)?;

        let form = fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let resp = self
            .http_client
            .post(self.camps_url())
            .multipart(form)
            .send()
            .await?;

        let created: Camp = Self::check(resp, "Failed to create camp")
            .await?
            .json()
            .await?;
        info!(id = %created.id, "Camp created");
        Ok(created)
    }

    /// Whether the directory answers its health check.
    pub async fn health(&self) -> Result<bool> {
        let resp = self
            .http_client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;

        let health: HealthResponse = Self::check(resp, "Health check failed")
            .await?
            .json()
            .await?;
        Ok(health.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = DirectoryClient::new("https://api.bhandara.app/").unwrap();

        assert_eq!(client.camps_url(), "https://api.bhandara.app/api/camps");
        assert_eq!(
            client.camp_url("65f1c0ffee"),
            "https://api.bhandara.app/api/camps/65f1c0ffee"
        );
        assert_eq!(
            client.camp_url("a/b"),
            "https://api.bhandara.app/api/camps/a%2Fb"
        );
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = DirectoryClient::new("localhost:8000").err().unwrap();
        assert!(matches!(err, DirectoryError::Config(_)));
        assert!(DirectoryClient::new("ftp://api.bhandara.app").is_err());
    }

    #[test]
    fn test_listing_404_is_an_api_error() {
        let err =
            DirectoryClient::api_error(StatusCode::NOT_FOUND, "", "Failed to fetch camps");

        assert!(matches!(
            err,
            DirectoryError::Api { status: 404, ref message } if message == "Failed to fetch camps"
        ));
        assert_eq!(err.to_string(), "API error (404): Failed to fetch camps");
    }

    #[tokio::test]
    async fn test_invalid_submission_never_sent() {
        // Unroutable: reaching the network would surface as a Network error
        let client = DirectoryClient::new("http://127.0.0.1:9").unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let err = client
            .create_camp(&NewCamp::default(), today)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DirectoryError::Invalid(ValidationError::TitleRequired)
        ));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_blank_id_is_not_found() {
        let client = DirectoryClient::new("http://127.0.0.1:9").unwrap();

        let err = client.get_camp("  ").await.unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound));
    }

    #[test]
    fn test_retryable_errors() {
        assert!(DirectoryError::Network("reset".into()).is_retryable());
        assert!(DirectoryError::Api {
            status: 503,
            message: String::new()
        }
        .is_retryable());
        assert!(!DirectoryError::Api {
            status: 400,
            message: String::new()
        }
        .is_retryable());
    }
}
