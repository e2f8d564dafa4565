use chrono::{TimeZone, Utc};
use newsrack_types::{ContentItem, ContentPage};

/// Build an item with a title and category.
pub fn item(id: &str, title: &str, category: &str) -> ContentItem {
    let mut it = ContentItem::new(id);
    it.title = Some(title.to_string());
    if !category.is_empty() {
        it.category = Some(category.to_string());
    }
    it
}

/// Build an item stamped on a given day of January 2026, so recency ordering
/// in tests reads naturally (higher day = newer).
pub fn dated_item(id: &str, title: &str, category: &str, day: u32) -> ContentItem {
    let mut it = item(id, title, category);
    it.last_modified = Utc.with_ymd_and_hms(2026, 1, day, 0, 0, 0).single();
    it
}

pub fn page(items: Vec<ContentItem>, total: usize, has_more: bool) -> ContentPage {
    ContentPage {
        items,
        total,
        has_more,
    }
}
