pub mod http;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SearchError;
use crate::types::{Filter, GeoArea, SearchResponse};

/// Remote search service seam.
///
/// The controller only ever talks to this trait; [`http::HttpBackend`] is the
/// production implementation and tests substitute scripted ones.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute a scoped search. `area` is the nearby-search extension point
    /// and may be `None`.
    async fn search(
        &self,
        query: &str,
        filter: Filter,
        area: Option<GeoArea>,
    ) -> Result<SearchResponse, SearchError>;

    /// Fetch query completions for the current input.
    async fn suggestions(&self, query: &str) -> Result<Vec<String>, SearchError>;
}

pub type SharedBackend = Arc<dyn SearchBackend>;
