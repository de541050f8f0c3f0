//! Steam Store search API surface.
//!
//! Lookups go against the public `storesearch` endpoint, which ranks matches
//! by relevance. Only the top-ranked item of each response is consumed.

mod client;
mod error;

pub use client::{STORE_SEARCH_ENDPOINT, SearchItem, SearchResponse, SteamClient};
pub use error::ResolveError;

/// Integer catalog ID identifying a product on the Steam store.
pub type AppId = u32;
