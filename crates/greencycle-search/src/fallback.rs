//! Local fallback for the main search.
//!
//! When the service is unreachable or errors, the session degrades to a fixed
//! sample set filtered by the same predicate the server would apply. The user
//! never sees a transport error for this operation; failures degrade silently
//! to reduced-quality data. Availability over correctness, by policy — this
//! is a non-critical discovery feature.

use crate::types::{Filter, ResultKind, SearchResult};

/// The fixed sample set served when the service is unavailable.
pub fn sample_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            id: "1".to_string(),
            kind: ResultKind::Dump,
            title: "Plastic Waste Dump".to_string(),
            description: "Large collection of plastic bottles and containers".to_string(),
            location: Some("Central Park, Accra".to_string()),
            photo_url: Some("https://example.com/photo1.jpg".to_string()),
            price: None,
            artisan: None,
            verified: None,
            distance_km: Some(0.5),
        },
        SearchResult {
            id: "2".to_string(),
            kind: ResultKind::MarketplaceItem,
            title: "Upcycled Plastic Bottles".to_string(),
            description: "Beautiful planters made from recycled bottles".to_string(),
            location: Some("Artisan Market".to_string()),
            photo_url: None,
            price: Some(80.0),
            artisan: Some("Felix".to_string()),
            verified: Some(true),
            distance_km: None,
        },
        SearchResult {
            id: "3".to_string(),
            kind: ResultKind::User,
            title: "Eco Warrior".to_string(),
            description: "Active community member with 50+ cleanups".to_string(),
            location: Some("Accra, Ghana".to_string()),
            photo_url: None,
            price: None,
            artisan: None,
            verified: Some(true),
            distance_km: None,
        },
    ]
}

/// Filter the sample set the way the server would: case-insensitive substring
/// match on title, description and location, intersected with the active
/// filter.
pub fn resolve(query: &str, filter: Filter) -> Vec<SearchResult> {
    let needle = query.to_lowercase();
    sample_results()
        .into_iter()
        .filter(|result| {
            let matches_query = result.title.to_lowercase().contains(&needle)
                || result.description.to_lowercase().contains(&needle)
                || result
                    .location
                    .as_deref()
                    .map(|location| location.to_lowercase().contains(&needle))
                    .unwrap_or(false);
            matches_query && filter.accepts(result.kind)
        })
        .collect()
}
