//! Debounced, cancelable address autocomplete.
//!
//! Every input bumps a generation number and cancels the lookup scheduled
//! for the previous input. Both happen while the pending-lookup lock is
//! held, so the newest token always belongs to the newest generation. A
//! lookup only publishes its suggestions if its generation is still
//! current, checked inside the watch channel's lock, so a slow response for
//! an old query can never overwrite the suggestions for a newer one.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::types::Suggestion;
use crate::Geocoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutocompleteConfig {
    /// Quiet period after the last input before a lookup is sent.
    pub debounce: Duration,
    /// Trimmed inputs shorter than this clear the suggestions instead.
    pub min_chars: usize,
}

impl Default for AutocompleteConfig {
    /// City picker settings.
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(400),
            min_chars: 2,
        }
    }
}

impl AutocompleteConfig {
    /// Street address field on the add-camp form.
    pub fn address_form() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            min_chars: 3,
        }
    }
}

/// What a suggestion list should currently show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionState {
    /// Incremented on every input
    pub generation: u64,
    /// Latest input, as typed
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    /// A lookup for `query` is scheduled or in flight
    pub searching: bool,
}

pub struct Autocomplete<G: ?Sized> {
    geocoder: Arc<G>,
    config: AutocompleteConfig,
    state: Arc<watch::Sender<SuggestionState>>,
    pending: Mutex<Option<CancellationToken>>,
}

impl<G> Autocomplete<G>
where
    G: Geocoder + ?Sized + 'static,
{
    pub fn new(geocoder: Arc<G>, config: AutocompleteConfig) -> Self {
        let (state, _) = watch::channel(SuggestionState::default());
        Self {
            geocoder,
            config,
            state: Arc::new(state),
            pending: Mutex::new(None),
        }
    }

    pub fn config(&self) -> AutocompleteConfig {
        self.config
    }

    /// Watch suggestion changes.
    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> SuggestionState {
        self.state.borrow().clone()
    }

    /// Record a new input value and schedule its lookup.
    ///
    /// Must be called inside a Tokio runtime. Returns the lookup task, or
    /// `None` when the input is too short to search.
    pub fn input(&self, query: impl Into<String>) -> Option<JoinHandle<()>> {
        let query = query.into();
        let searchable = query.trim().chars().count() >= self.config.min_chars;

        // Held until the new generation and its token are both in place
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.cancel();
        }

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.query = query.clone();
            state.searching = searchable;
            if !searchable {
                state.suggestions.clear();
            }
        });

        if !searchable {
            return None;
        }
        let cancel = CancellationToken::new();
        *pending = Some(cancel.clone());
        drop(pending);

        debug!(generation, query = %query, "Scheduling autocomplete lookup");

        Some(tokio::spawn(lookup(
            self.geocoder.clone(),
            self.state.clone(),
            cancel,
            generation,
            query.trim().to_string(),
            self.config.debounce,
        )))
    }

    /// Drop the current suggestions and any pending lookup.
    pub fn clear(&self) {
        self.input(String::new());
    }
}

impl<G: ?Sized> Drop for Autocomplete<G> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = pending.take() {
            token.cancel();
        }
    }
}

async fn lookup<G>(
    geocoder: Arc<G>,
    state: Arc<watch::Sender<SuggestionState>>,
    cancel: CancellationToken,
    generation: u64,
    query: String,
    debounce: Duration,
) where
    G: Geocoder + ?Sized,
{
    tokio::select! {
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(debounce) => {}
    }

    let result = tokio::select! {
        _ = cancel.cancelled() => {
            debug!(generation, "Autocomplete lookup superseded in flight");
            return;
        }
        result = geocoder.search(&query) => result,
    };

    let suggestions = match result {
        Ok(suggestions) => suggestions,
        Err(e) => {
            warn!(error = %e, query = %query, "Autocomplete lookup failed");
            Vec::new()
        }
    };

    let applied = state.send_if_modified(|current| {
        if current.generation != generation {
            return false;
        }
        current.suggestions = suggestions;
        current.searching = false;
        true
    });

    if !applied {
        debug!(generation, "Discarded stale autocomplete results");
    }
}
