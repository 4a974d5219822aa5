//! Client-side search session core for the GreenCycle community app.
//!
//! A single user query fans out to three result categories (dump reports,
//! marketplace listings, user profiles) behind one debounced controller.
//! Network failures never surface to the caller: the main search degrades to
//! a local sample set and suggestions degrade to a fixed list, so the
//! discovery surface stays available when the service is not.

pub mod aggregator;
pub mod backend;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod fallback;
pub mod store;
pub mod suggestions;
pub mod types;

pub use crate::backend::http::HttpBackend;
pub use crate::backend::{SearchBackend, SharedBackend};
pub use crate::config::SearchConfig;
pub use crate::controller::SearchController;
pub use crate::error::SearchError;
pub use crate::store::{Action, SessionState};
pub use crate::types::{Filter, ResultKind, SearchResult};
