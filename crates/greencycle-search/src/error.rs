use std::fmt;

/// Unified error type for the search core.
///
/// Nothing here is fatal: the resolvers absorb every variant into degraded
/// local data before it reaches the UI. Empty input is not an error — the
/// controller clears state synchronously instead of issuing a request.
#[derive(Debug, Clone)]
pub enum SearchError {
    /// Network unreachable or the request itself failed.
    Transport(String),
    /// Service answered with a non-2xx status.
    Service(u16),
    /// Service answered 2xx but the payload shape is not usable.
    InvalidResponse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Transport(msg) => write!(f, "transport failure: {msg}"),
            SearchError::Service(status) => write!(f, "service failure: status {status}"),
            SearchError::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            SearchError::InvalidResponse(error.to_string())
        } else {
            SearchError::Transport(error.to_string())
        }
    }
}
