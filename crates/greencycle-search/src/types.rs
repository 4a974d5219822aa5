use serde::{Deserialize, Serialize};

/// Result category scope selected by the user.
///
/// Transmitted verbatim in the `type` query parameter; the server performs
/// the actual scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Dumps,
    Marketplace,
    Users,
}

impl Filter {
    /// Wire name used in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Dumps => "dumps",
            Filter::Marketplace => "marketplace",
            Filter::Users => "users",
        }
    }

    /// Whether a result of the given kind falls inside this scope.
    /// `All` bypasses the kind check entirely.
    pub fn accepts(&self, kind: ResultKind) -> bool {
        match self {
            Filter::All => true,
            Filter::Dumps => kind == ResultKind::Dump,
            Filter::Marketplace => kind == ResultKind::MarketplaceItem,
            Filter::Users => kind == ResultKind::User,
        }
    }
}

/// Tag identifying which category a merged result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultKind {
    #[serde(rename = "dump")]
    Dump,
    #[serde(rename = "marketplace")]
    MarketplaceItem,
    #[serde(rename = "user")]
    User,
}

/// Navigation target for a tapped result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AdoptDump,
    Marketplace,
    Profile,
}

/// One entry in the merged result list.
///
/// All three categories share this shape; fields outside a variant's
/// relevance are simply `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artisan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl SearchResult {
    /// Screen a tap on this result navigates to.
    pub fn route(&self) -> Route {
        match self.kind {
            ResultKind::Dump => Route::AdoptDump,
            ResultKind::MarketplaceItem => Route::Marketplace,
            ResultKind::User => Route::Profile,
        }
    }
}

/// Optional geolocation scope for nearby search.
///
/// Plumbed through to the query string but never populated by the
/// controller; the client does not read device location yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoArea {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: u32,
}

/// A dump report as the search endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
}

/// A marketplace listing as the search endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub artisan: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

/// A user profile as the search endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

/// Validated body of `GET /api/search`.
///
/// Each category list is optional on the wire; absent means empty here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResponse {
    pub dumps: Vec<DumpRecord>,
    pub marketplace: Vec<ListingRecord>,
    pub users: Vec<UserRecord>,
}
