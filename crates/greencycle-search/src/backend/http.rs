use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::backend::SearchBackend;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{Filter, GeoArea, SearchResponse};

/// REST client for the GreenCycle search endpoints.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self, query: &str, filter: Filter, area: Option<GeoArea>) -> String {
        let mut url = format!(
            "{}/api/search?q={}&type={}",
            self.base_url,
            urlencoding::encode(query),
            filter.as_str()
        );
        if let Some(area) = area {
            url.push_str(&format!(
                "&latitude={}&longitude={}&radius={}",
                area.latitude, area.longitude, area.radius_km
            ));
        }
        url
    }

    fn suggestions_url(&self, query: &str) -> String {
        format!(
            "{}/api/search/suggestions?q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn search(
        &self,
        query: &str,
        filter: Filter,
        area: Option<GeoArea>,
    ) -> Result<SearchResponse, SearchError> {
        let url = self.search_url(query, filter, area);
        tracing::debug!(%url, "dispatching search request");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Service(status.as_u16()));
        }
        let body: Value = response.json().await?;
        parse_search_payload(body)
    }

    async fn suggestions(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let url = self.suggestions_url(query);
        tracing::debug!(%url, "dispatching suggestion request");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Service(status.as_u16()));
        }
        let body: Value = response.json().await?;
        parse_suggestions_payload(body)
    }
}

/// Validate the search body into typed category lists.
///
/// The top-level shape must be an object whose category fields, when present,
/// are arrays. Individual malformed entries are dropped rather than failing
/// the whole response.
pub(crate) fn parse_search_payload(body: Value) -> Result<SearchResponse, SearchError> {
    let object = body.as_object().ok_or_else(|| {
        SearchError::InvalidResponse("search payload is not a JSON object".to_string())
    })?;
    Ok(SearchResponse {
        dumps: parse_category(object, "dumps")?,
        marketplace: parse_category(object, "marketplace")?,
        users: parse_category(object, "users")?,
    })
}

fn parse_category<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &str,
) -> Result<Vec<T>, SearchError> {
    let value = match object.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value,
    };
    let entries = value
        .as_array()
        .ok_or_else(|| SearchError::InvalidResponse(format!("field `{key}` is not an array")))?;
    let mut parsed = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<T>(entry.clone()) {
            Ok(record) => parsed.push(record),
            Err(error) => {
                tracing::warn!(%error, category = key, "dropping malformed search entry");
            }
        }
    }
    Ok(parsed)
}

pub(crate) fn parse_suggestions_payload(body: Value) -> Result<Vec<String>, SearchError> {
    let entries = body.as_array().ok_or_else(|| {
        SearchError::InvalidResponse("suggestions payload is not an array".to_string())
    })?;
    Ok(entries
        .iter()
        .filter_map(|entry| match entry.as_str() {
            Some(text) => Some(text.to_string()),
            None => {
                tracing::warn!("dropping non-string suggestion entry");
                None
            }
        })
        .collect())
}
