//! Testing utilities including a mock geocoder.
//!
//! Lets autocomplete and form flows run without touching the network.

use async_trait::async_trait;
use camp_core::Coordinates;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{GeocodeError, Result};
use crate::types::Suggestion;
use crate::Geocoder;

/// A mock geocoder with canned answers per query.
///
/// Unknown queries return no suggestions. Per-query delays are slept with
/// `tokio::time`, so paused-clock tests control arrival order.
#[derive(Default, Clone)]
pub struct MockGeocoder {
    results: Arc<RwLock<HashMap<String, Vec<Suggestion>>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    failures: Arc<RwLock<HashMap<String, u16>>>,
    reverse_name: Arc<RwLock<Option<String>>>,
    reverse_failure: Arc<RwLock<Option<u16>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(self, query: &str, results: Vec<Suggestion>) -> Self {
        self.results
            .write()
            .unwrap()
            .insert(query.to_string(), results);
        self
    }

    pub fn with_delay(self, query: &str, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(query.to_string(), delay);
        self
    }

    /// Answer `query` with an API error of the given status.
    pub fn with_failure(self, query: &str, status: u16) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(query.to_string(), status);
        self
    }

    pub fn with_reverse_name(self, name: &str) -> Self {
        *self.reverse_name.write().unwrap() = Some(name.to_string());
        self
    }

    /// Answer every reverse lookup with an API error of the given status.
    pub fn with_reverse_failure(self, status: u16) -> Self {
        *self.reverse_failure.write().unwrap() = Some(status);
        self
    }

    /// Queries searched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>> {
        self.calls.write().unwrap().push(query.to_string());

        let delay = self.delays.read().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failures.read().unwrap().get(query).copied();
        if let Some(status) = failure {
            return Err(GeocodeError::Api {
                status,
                message: "mock failure".to_string(),
            });
        }

        Ok(self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }

    async fn reverse(&self, _coordinates: Coordinates) -> Result<Option<String>> {
        if let Some(status) = *self.reverse_failure.read().unwrap() {
            return Err(GeocodeError::Api {
                status,
                message: "mock failure".to_string(),
            });
        }
        Ok(self.reverse_name.read().unwrap().clone())
    }
}

/// Suggestion at an arbitrary valid position, for fixtures.
pub fn suggestion(display_name: &str) -> Suggestion {
    let coordinates = Coordinates::new(20.5937, 78.9629).expect("valid fixture coordinates");
    Suggestion::new(display_name, coordinates)
}
