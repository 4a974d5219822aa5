use std::time::Duration;

/// Dev-server default; overridden by `GREENCYCLE_API_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Quiescence window before a settled query is executed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Quiescence window before a suggestion fetch is issued.
pub const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(200);

/// Configuration for one search session.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub base_url: String,
    pub search_window: Duration,
    pub suggest_window: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_window: SEARCH_DEBOUNCE,
            suggest_window: SUGGEST_DEBOUNCE,
        }
    }
}

impl SearchConfig {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GREENCYCLE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }
}
