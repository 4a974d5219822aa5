//! Explicit state container for one search session.
//!
//! Every mutation goes through a typed [`Action`] and the pure
//! [`SessionState::apply`] transition, so the session has no ambient state
//! and the ordering policy is testable in isolation.
//!
//! Ordering: displayed results must always correspond to the most recently
//! settled query/filter pair. Each dispatched request carries a monotonically
//! increasing sequence number and a loaded response is discarded unless its
//! number is newer than the last one applied, so a slow stale response can
//! never overwrite fresher data. Synchronous clears also consume a sequence
//! number, which invalidates requests still in flight for the cleared query.

use serde::{Deserialize, Serialize};

use crate::types::{Filter, SearchResult};

/// Snapshot of a search session, published after every transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub query: String,
    pub filter: Filter,
    pub results: Vec<SearchResult>,
    pub suggestions: Vec<String>,
    pub loading: bool,
    /// Sequence number of the last applied result transition.
    pub results_seq: u64,
    /// Sequence number of the last applied suggestion transition.
    pub suggestions_seq: u64,
}

/// A typed state transition.
#[derive(Debug, Clone)]
pub enum Action {
    QueryChanged(String),
    FilterSelected(Filter),
    /// A settled search was handed to the backend.
    SearchDispatched { seq: u64 },
    ResultsLoaded { seq: u64, results: Vec<SearchResult> },
    ResultsCleared { seq: u64 },
    SuggestionsLoaded { seq: u64, suggestions: Vec<String> },
    SuggestionsCleared { seq: u64 },
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            filter: Filter::All,
            results: Vec::new(),
            suggestions: Vec::new(),
            loading: false,
            results_seq: 0,
            suggestions_seq: 0,
        }
    }

    /// Apply one transition. Stale loads (sequence not newer than the last
    /// applied one) are dropped.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::QueryChanged(query) => {
                self.query = query;
            }
            Action::FilterSelected(filter) => {
                self.filter = filter;
            }
            Action::SearchDispatched { seq } => {
                if seq > self.results_seq {
                    self.loading = true;
                }
            }
            Action::ResultsLoaded { seq, results } => {
                if seq > self.results_seq {
                    self.results_seq = seq;
                    self.results = results;
                    self.loading = false;
                } else {
                    tracing::debug!(seq, latest = self.results_seq, "dropping stale search response");
                }
            }
            Action::ResultsCleared { seq } => {
                if seq > self.results_seq {
                    self.results_seq = seq;
                }
                self.results.clear();
                self.loading = false;
            }
            Action::SuggestionsLoaded { seq, suggestions } => {
                if seq > self.suggestions_seq {
                    self.suggestions_seq = seq;
                    self.suggestions = suggestions;
                } else {
                    tracing::debug!(
                        seq,
                        latest = self.suggestions_seq,
                        "dropping stale suggestion response"
                    );
                }
            }
            Action::SuggestionsCleared { seq } => {
                if seq > self.suggestions_seq {
                    self.suggestions_seq = seq;
                }
                self.suggestions.clear();
            }
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
