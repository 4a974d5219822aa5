//! Merges the three category lists of a search response into one flat,
//! tagged result list.
//!
//! Concatenation order is fixed — dumps, then marketplace, then users — and
//! no cross-category ranking is applied; the server owns relevance within
//! each category.

use crate::types::{ResultKind, SearchResponse, SearchResult};

/// Map a validated response into the merged result list.
pub fn merge(response: SearchResponse) -> Vec<SearchResult> {
    let mut results = Vec::with_capacity(
        response.dumps.len() + response.marketplace.len() + response.users.len(),
    );

    for dump in response.dumps {
        results.push(SearchResult {
            id: dump.id,
            kind: ResultKind::Dump,
            title: dump.title,
            description: dump.description,
            location: dump.location,
            photo_url: dump.photo_url,
            price: None,
            artisan: None,
            verified: None,
            distance_km: dump.distance,
        });
    }

    for listing in response.marketplace {
        results.push(SearchResult {
            id: listing.id,
            kind: ResultKind::MarketplaceItem,
            title: listing.title,
            description: listing.description,
            location: listing.location,
            photo_url: None,
            price: listing.price,
            artisan: listing.artisan,
            verified: listing.verified,
            distance_km: None,
        });
    }

    for user in response.users {
        let wallet_prefix: String = user
            .wallet_address
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(8)
            .collect();
        results.push(SearchResult {
            id: user.id,
            kind: ResultKind::User,
            title: user.name,
            description: format!("Eco warrior with wallet: {wallet_prefix}..."),
            location: Some("Community Member".to_string()),
            photo_url: None,
            price: None,
            artisan: None,
            verified: user.verified,
            distance_km: None,
        });
    }

    results
}
