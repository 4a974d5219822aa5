//! Session controller: wires UI input, the two debounce channels, the
//! backend and the state store into one event loop.
//!
//! The loop runs on a single task; every network call is spawned off so the
//! loop keeps accepting keystrokes while requests are in flight. Completed
//! requests come back tagged with the sequence number assigned at dispatch,
//! and the store drops any response that is no longer the latest.

use tokio::sync::{mpsc, watch};

use crate::aggregator;
use crate::backend::{SearchBackend, SharedBackend};
use crate::config::SearchConfig;
use crate::debounce::debounce;
use crate::fallback;
use crate::store::{Action, SessionState};
use crate::suggestions;
use crate::types::{Filter, SearchResult};

enum UiEvent {
    Query(String),
    Filter(Filter),
}

enum Outcome {
    Results { seq: u64, results: Vec<SearchResult> },
    Suggestions { seq: u64, suggestions: Vec<String> },
}

/// Handle to a running search session.
///
/// Created at screen mount, dropped at unmount; dropping closes the input
/// channel and winds the session task down. No state is persisted.
pub struct SearchController {
    events: mpsc::UnboundedSender<UiEvent>,
    state: watch::Receiver<SessionState>,
}

impl SearchController {
    /// Spawn the session event loop.
    pub fn spawn(backend: SharedBackend, config: SearchConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SessionState::new());
        tokio::spawn(run_session(backend, config, event_rx, state_tx));
        Self {
            events: event_tx,
            state: state_rx,
        }
    }

    /// Feed one keystroke's worth of query text.
    pub fn query_changed(&self, query: &str) {
        let _ = self.events.send(UiEvent::Query(query.to_string()));
    }

    /// Select a result-category filter.
    pub fn filter_selected(&self, filter: Filter) {
        let _ = self.events.send(UiEvent::Filter(filter));
    }

    /// Watch channel of session snapshots; `borrow()` gives the latest.
    pub fn state(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }
}

async fn run_session(
    backend: SharedBackend,
    config: SearchConfig,
    mut events: mpsc::UnboundedReceiver<UiEvent>,
    state_tx: watch::Sender<SessionState>,
) {
    // Clears travel through the debounce channels as `None` so a blank or
    // too-short keystroke replaces any pending item: the cancelled query can
    // never settle and fire after its state was cleared. A settled `None` is
    // a no-op, since the clear itself already happened synchronously.
    let (search_tx, search_rx) = mpsc::unbounded_channel::<Option<(String, Filter)>>();
    let mut search_settled = debounce(search_rx, config.search_window);
    let (suggest_tx, suggest_rx) = mpsc::unbounded_channel::<Option<String>>();
    let mut suggest_settled = debounce(suggest_rx, config.suggest_window);
    let (outcome_tx, mut outcomes) = mpsc::unbounded_channel::<Outcome>();

    let mut state = SessionState::new();
    let mut search_seq: u64 = 0;
    let mut suggest_seq: u64 = 0;

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                match event {
                    UiEvent::Query(query) => {
                        state.apply(Action::QueryChanged(query.clone()));
                        if query.trim().is_empty() {
                            // Blank input clears synchronously; no request.
                            search_seq += 1;
                            state.apply(Action::ResultsCleared { seq: search_seq });
                            let _ = search_tx.send(None);
                        } else {
                            let _ = search_tx.send(Some((query.clone(), state.filter)));
                        }
                        if suggestions::should_fetch(&query) {
                            let _ = suggest_tx.send(Some(query));
                        } else {
                            suggest_seq += 1;
                            state.apply(Action::SuggestionsCleared { seq: suggest_seq });
                            let _ = suggest_tx.send(None);
                        }
                    }
                    UiEvent::Filter(filter) => {
                        state.apply(Action::FilterSelected(filter));
                        // A filter tap re-arms the search debouncer with the
                        // current query.
                        if !state.query.trim().is_empty() {
                            let _ = search_tx.send(Some((state.query.clone(), filter)));
                        }
                    }
                }
                let _ = state_tx.send(state.clone());
            }
            Some(settled) = search_settled.recv() => {
                if let Some((query, filter)) = settled {
                    search_seq += 1;
                    let seq = search_seq;
                    state.apply(Action::SearchDispatched { seq });
                    let _ = state_tx.send(state.clone());

                    let backend = backend.clone();
                    let outcome_tx = outcome_tx.clone();
                    tokio::spawn(async move {
                        let results = execute_search(backend.as_ref(), &query, filter).await;
                        let _ = outcome_tx.send(Outcome::Results { seq, results });
                    });
                }
            }
            Some(settled) = suggest_settled.recv() => {
                if let Some(query) = settled {
                    suggest_seq += 1;
                    let seq = suggest_seq;

                    let backend = backend.clone();
                    let outcome_tx = outcome_tx.clone();
                    tokio::spawn(async move {
                        let suggestions = suggestions::resolve(backend.as_ref(), &query).await;
                        let _ = outcome_tx.send(Outcome::Suggestions { seq, suggestions });
                    });
                }
            }
            Some(outcome) = outcomes.recv() => {
                match outcome {
                    Outcome::Results { seq, results } => {
                        state.apply(Action::ResultsLoaded { seq, results });
                    }
                    Outcome::Suggestions { seq, suggestions } => {
                        state.apply(Action::SuggestionsLoaded { seq, suggestions });
                    }
                }
                let _ = state_tx.send(state.clone());
            }
        }
    }
}

/// Run one settled search, absorbing every failure into the local fallback.
async fn execute_search(
    backend: &dyn SearchBackend,
    query: &str,
    filter: Filter,
) -> Vec<SearchResult> {
    match backend.search(query, filter, None).await {
        Ok(response) => aggregator::merge(response),
        Err(error) => {
            tracing::warn!(%error, query, "search backend failed, serving local fallback");
            fallback::resolve(query, filter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::types::{GeoArea, SearchResponse};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    struct UnreachableBackend;

    #[async_trait]
    impl SearchBackend for UnreachableBackend {
        async fn search(
            &self,
            _query: &str,
            _filter: Filter,
            _area: Option<GeoArea>,
        ) -> Result<SearchResponse, SearchError> {
            Err(SearchError::Transport("unreachable".to_string()))
        }

        async fn suggestions(&self, _query: &str) -> Result<Vec<String>, SearchError> {
            Err(SearchError::Transport("unreachable".to_string()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failed_search_degrades_to_fallback() {
        let controller =
            SearchController::spawn(Arc::new(UnreachableBackend), SearchConfig::default());

        controller.query_changed("plastic");
        tokio::time::sleep(Duration::from_millis(500)).await;

        let state = controller.state().borrow().clone();
        assert_eq!(state.results, fallback::resolve("plastic", Filter::All));
        assert!(!state.loading);
    }
}
