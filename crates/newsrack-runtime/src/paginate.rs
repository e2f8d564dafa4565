use crate::expansion::ExpansionTracker;
use crate::fetch::PageFetcher;
use crate::store::ContentStore;
use newsrack_engine::CategoryBucket;
use newsrack_types::{ContentPage, FetchError};
use serde::Serialize;
use std::collections::HashMap;

/// How close the visible window may get to the loaded item count before
/// another page is requested.
pub const NEAR_EXHAUSTION_MARGIN: usize = 4;

/// User-facing pagination state for the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStatus {
    Idle,
    Loading,
    Exhausted,
    Error,
}

/// Decide whether another page should be fetched.
///
/// More data is needed when no search is active, the server reports more
/// pages, no fetch is already in flight, and the number of currently visible
/// items is within `NEAR_EXHAUSTION_MARGIN` of everything loaded so far —
/// i.e. the user is close to exhausting what has been fetched.
pub fn needs_more(
    buckets: &[CategoryBucket],
    allocation: &HashMap<String, usize>,
    expansion: &ExpansionTracker,
    store: &ContentStore,
    search_active: bool,
) -> bool {
    if search_active || !store.has_more() || store.is_fetching() {
        return false;
    }

    let visible: usize = buckets
        .iter()
        .map(|bucket| {
            if expansion.is_expanded(&bucket.name) {
                bucket.items.len()
            } else {
                allocation.get(&bucket.name).copied().unwrap_or(0)
            }
        })
        .sum();

    visible + NEAR_EXHAUSTION_MARGIN >= store.len()
}

/// Fetch the next page under the store's single-flight guard.
///
/// Returns `Ok(None)` without touching the network when a fetch is already
/// in flight. The fetched page is handed back *uncommitted*: the caller
/// merges it only after its own still-relevant check, so a page landing
/// after the consumer stopped caring is simply dropped. `end_fetch` runs on
/// every path, success or failure.
pub async fn fetch_next(
    store: &mut ContentStore,
    fetcher: &dyn PageFetcher,
    limit: usize,
) -> std::result::Result<Option<ContentPage>, FetchError> {
    if !store.begin_fetch() {
        return Ok(None);
    }

    let outcome = fetcher.fetch_page(store.offset(), limit).await;
    store.end_fetch();

    outcome.map(Some)
}
