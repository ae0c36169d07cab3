//! Bulk search orchestration.
//!
//! Fans out one upstream fetch per search key and fans all outcomes back in.

use futures::future::join_all;
use log::debug;

use crate::client::FlightInventory;
use crate::models::{RawSearchResult, SearchKey};

/// Fetches every key concurrently and returns all outcomes.
///
/// All fetches are dispatched before any is awaited, then a join-all barrier
/// suspends until the last one completes. The output is index-aligned with
/// `keys` regardless of completion order, and a failed fetch occupies its
/// slot as an `Err` value without cancelling, delaying, or corrupting any
/// other slot. No retries.
pub async fn search_bulk<C: FlightInventory>(client: &C, keys: &[SearchKey]) -> Vec<RawSearchResult> {
    debug!("dispatching {} concurrent searches", keys.len());
    let fetches: Vec<_> = keys.iter().map(|key| client.fetch(key)).collect();
    join_all(fetches).await
}
