use newsrack_engine::{allocate, bucket_items};
use newsrack_runtime::{ContentStore, ExpansionTracker, fetch_next, needs_more};
use newsrack_testing::{ScriptedFetcher, dated_item, page};
use newsrack_types::FetchError;

fn store_with(ids: &[&str], category: &str, total: usize, has_more: bool) -> ContentStore {
    let mut store = ContentStore::new();
    let items = ids
        .iter()
        .enumerate()
        .map(|(i, id)| dated_item(id, id, category, (i + 1) as u32))
        .collect();
    store.merge(items, total, has_more);
    store
}

#[test]
fn needs_more_when_visible_window_nears_loaded_count() {
    let store = store_with(&["a", "b", "c", "d", "e", "f"], "News", 40, true);
    let buckets = bucket_items(store.items());
    let allocation = allocate(&buckets, 12);
    let expansion = ExpansionTracker::new();

    // 4 visible of 6 loaded: within the margin of 4.
    assert!(needs_more(&buckets, &allocation, &expansion, &store, false));

    // An active search suppresses fetching entirely.
    assert!(!needs_more(&buckets, &allocation, &expansion, &store, true));
}

#[test]
fn no_fetch_needed_when_server_is_exhausted() {
    let store = store_with(&["a", "b"], "News", 2, false);
    let buckets = bucket_items(store.items());
    let allocation = allocate(&buckets, 12);
    assert!(!needs_more(
        &buckets,
        &allocation,
        &ExpansionTracker::new(),
        &store,
        false
    ));
}

#[test]
fn plenty_of_hidden_items_means_no_fetch() {
    let ids: Vec<String> = (0..30).map(|i| format!("n{}", i)).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let store = store_with(&id_refs, "News", 100, true);

    let buckets = bucket_items(store.items());
    let allocation = allocate(&buckets, 12);
    // 4 visible of 30 loaded: nowhere near exhaustion.
    assert!(!needs_more(
        &buckets,
        &allocation,
        &ExpansionTracker::new(),
        &store,
        false
    ));
}

#[test]
fn expansion_counts_toward_the_visible_window() {
    let ids: Vec<String> = (0..30).map(|i| format!("n{}", i)).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let store = store_with(&id_refs, "News", 100, true);

    let buckets = bucket_items(store.items());
    let allocation = allocate(&buckets, 12);
    let mut expansion = ExpansionTracker::new();
    expansion.expand("News");

    // All 30 visible of 30 loaded: the user can see the end.
    assert!(needs_more(&buckets, &allocation, &expansion, &store, false));
}

#[tokio::test]
async fn fetch_next_refuses_while_in_flight() {
    let mut store = ContentStore::new();
    assert!(store.begin_fetch());

    let fetcher = ScriptedFetcher::new().respond(page(vec![dated_item("a", "A", "News", 1)], 1, false));
    let outcome = fetch_next(&mut store, &fetcher, 20).await.unwrap();

    assert!(outcome.is_none());
    assert_eq!(fetcher.call_count(), 0, "guarded call must not hit the network");
}

#[tokio::test]
async fn fetch_next_requests_from_the_current_offset() {
    let mut store = store_with(&["a", "b", "c"], "News", 10, true);
    let fetcher = ScriptedFetcher::new().respond(page(vec![dated_item("d", "D", "News", 4)], 10, true));

    let fetched = fetch_next(&mut store, &fetcher, 20).await.unwrap();

    assert_eq!(fetcher.calls(), [(3, 20)]);
    assert!(!store.is_fetching(), "end_fetch must run on success");
    // The page comes back uncommitted; the store is untouched until merge.
    assert_eq!(store.len(), 3);
    assert_eq!(fetched.unwrap().items.len(), 1);
}

#[tokio::test]
async fn fetch_next_clears_the_flight_flag_on_failure() {
    let mut store = store_with(&["a"], "News", 10, true);
    let fetcher = ScriptedFetcher::new().fail(FetchError::Transport("boom".to_string()));

    let err = fetch_next(&mut store, &fetcher, 20).await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
    assert!(!store.is_fetching());
    assert_eq!(store.len(), 1);
    assert!(store.has_more());
}
