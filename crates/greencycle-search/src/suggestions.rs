//! Query-completion channel.
//!
//! Runs independently of the main search on its own, shorter debounce window.
//! Any fetch failure converges on one fixed fallback list; inputs shorter
//! than the minimum clear the list without a request.

use crate::backend::SearchBackend;

/// Inputs shorter than this (trimmed) clear suggestions instead of fetching.
pub const MIN_QUERY_LEN: usize = 2;

/// Served whenever a suggestion fetch fails, whatever the failure mode.
pub const SUGGESTION_FALLBACK: [&str; 4] = [
    "Plastic waste",
    "Community cleanup",
    "Upcycled items",
    "Eco warriors",
];

/// Default chips shown for an empty session, before the user has typed.
pub const POPULAR_SEARCHES: [&str; 4] = [
    "Plastic waste",
    "Upcycled items",
    "Community cleanup",
    "Eco warriors",
];

/// Whether the input is long enough to fetch completions for.
pub fn should_fetch(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

pub fn fallback_list() -> Vec<String> {
    SUGGESTION_FALLBACK.iter().map(|s| s.to_string()).collect()
}

/// Fetch completions, absorbing every failure into the fixed fallback list.
pub async fn resolve(backend: &dyn SearchBackend, query: &str) -> Vec<String> {
    match backend.suggestions(query).await {
        Ok(list) => list,
        Err(error) => {
            tracing::debug!(%error, query, "suggestion fetch failed, serving fixed fallback");
            fallback_list()
        }
    }
}
