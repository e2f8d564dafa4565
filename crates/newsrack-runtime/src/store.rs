use crate::error::{Error, Result};
use newsrack_types::{ContentItem, ContentPage};
use std::collections::HashSet;

/// The deduplicated, ever-growing set of fetched items plus pagination
/// cursors for one browsing session.
///
/// Invariants: item ids are unique (first-seen wins across overlapping
/// pages), and `offset() == items().len()` at all times — merging advances
/// the offset by the net-new count, not the count received. The store never
/// performs I/O; a failed fetch simply never reaches `merge`.
#[derive(Debug, Default)]
pub struct ContentStore {
    items: Vec<ContentItem>,
    seen: HashSet<String>,
    total: usize,
    has_more: bool,
    fetch_in_flight: bool,
    seeded: bool,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the store from a first page handed in at construction
    /// time. Valid exactly once, before any merge.
    pub fn seed(&mut self, page: ContentPage) -> Result<()> {
        if self.seeded || !self.items.is_empty() {
            return Err(Error::InvalidOperation(
                "content store is already seeded".to_string(),
            ));
        }
        self.seeded = true;
        self.merge(page.items, page.total, page.has_more);
        Ok(())
    }

    /// Append new items, dropping any whose id is already present, and adopt
    /// the latest server-reported `total`/`has_more`. Returns the number of
    /// items actually added.
    pub fn merge(&mut self, items: Vec<ContentItem>, total: usize, has_more: bool) -> usize {
        let before = self.items.len();
        for item in items {
            if self.seen.insert(item.id.clone()) {
                self.items.push(item);
            }
        }
        self.total = total;
        self.has_more = has_more;
        self.items.len() - before
    }

    /// Mark a fetch as in flight. Returns `false` (and changes nothing) when
    /// one already is; callers must not issue a network call in that case.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_in_flight {
            return false;
        }
        self.fetch_in_flight = true;
        true
    }

    pub fn end_fetch(&mut self) {
        self.fetch_in_flight = false;
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count of items already retrieved; the next page starts here.
    pub fn offset(&self) -> usize {
        self.items.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[&str]) -> Vec<ContentItem> {
        ids.iter().map(|id| ContentItem::new(*id)).collect()
    }

    #[test]
    fn merge_dedupes_by_id_first_seen_wins() {
        let mut store = ContentStore::new();
        let mut first = ContentItem::new("a");
        first.title = Some("original".to_string());
        store.merge(vec![first], 10, true);

        let mut dup = ContentItem::new("a");
        dup.title = Some("replacement".to_string());
        let added = store.merge(vec![dup, ContentItem::new("b")], 10, true);

        assert_eq!(added, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].title.as_deref(), Some("original"));
    }

    #[test]
    fn offset_tracks_net_new_count() {
        let mut store = ContentStore::new();
        store.merge(items(&["a", "b", "c"]), 10, true);
        assert_eq!(store.offset(), 3);

        // One duplicate in the next page: offset advances by two, not three.
        store.merge(items(&["c", "d", "e"]), 10, true);
        assert_eq!(store.offset(), 5);
    }

    #[test]
    fn seed_twice_is_rejected() {
        let mut store = ContentStore::new();
        let page = ContentPage {
            items: items(&["a"]),
            total: 1,
            has_more: false,
        };
        store.seed(page.clone()).unwrap();
        assert!(matches!(
            store.seed(page),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn single_flight_guard() {
        let mut store = ContentStore::new();
        assert!(store.begin_fetch());
        assert!(!store.begin_fetch());
        assert!(store.is_fetching());
        store.end_fetch();
        assert!(store.begin_fetch());
    }
}
