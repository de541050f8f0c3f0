//! Blocking client for the Steam storesearch endpoint.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::debug;

use super::{AppId, ResolveError};

/// Public storesearch endpoint.
pub const STORE_SEARCH_ENDPOINT: &str = "https://store.steampowered.com/api/storesearch/";

const API_LANGUAGE: &str = "english";
const API_COUNTRY: &str = "US";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Top matches logged at debug level per query.
const MAX_DEBUG_RESULTS: usize = 3;

/// Search response returned by the storesearch endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One ranked match in a search response.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: AppId,
    pub name: String,
}

/// Issues single-shot storesearch lookups with a bounded timeout.
///
/// The underlying connection pool is shared, so one client serves every
/// worker in the pool.
pub struct SteamClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl SteamClient {
    /// Build a client against the public endpoint.
    pub fn new() -> Result<Self, ResolveError> {
        Self::with_endpoint(STORE_SEARCH_ENDPOINT)
    }

    /// Build a client against a custom endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, ResolveError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ResolveError::Network)?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Look up `term` and return the top-ranked app ID.
    ///
    /// The API ranks by relevance, so the first item is taken as
    /// authoritative; no local re-ranking happens. One attempt per call.
    pub fn resolve(&self, term: &str) -> Result<AppId, ResolveError> {
        debug!(term, endpoint = %self.endpoint, "querying store search");
        let started = Instant::now();

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("term", term), ("l", API_LANGUAGE), ("cc", API_COUNTRY)])
            .send()
            .map_err(ResolveError::Network)?;

        let status = response.status();
        debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response received"
        );
        if !status.is_success() {
            return Err(ResolveError::HttpStatus(status.as_u16()));
        }

        let body = response.text().map_err(ResolveError::Network)?;
        top_match(&body)
    }
}

/// Parse a search body and extract the top-ranked app ID.
fn top_match(body: &str) -> Result<AppId, ResolveError> {
    let parsed: SearchResponse = serde_json::from_str(body).map_err(ResolveError::Decode)?;
    debug!(results = parsed.items.len(), "search results");
    for (rank, item) in parsed.items.iter().take(MAX_DEBUG_RESULTS).enumerate() {
        debug!(rank = rank + 1, id = item.id, name = %item.name, "candidate");
    }
    parsed
        .items
        .first()
        .map(|item| item.id)
        .ok_or(ResolveError::NotFound)
}
