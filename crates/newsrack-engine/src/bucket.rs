use newsrack_types::ContentItem;
use std::collections::HashMap;

/// A named group of content items sharing a category, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket {
    pub name: String,
    pub items: Vec<ContentItem>,
}

impl CategoryBucket {
    /// Timestamp of the most recent item, used to order the bucket list.
    /// Buckets holding only undated items sort as oldest.
    fn latest_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.items.iter().filter_map(|i| i.last_modified).max()
    }
}

/// Group items into category buckets.
///
/// Grouping is a stable one-pass walk: buckets are created in first-seen
/// order, so duplicate categories never produce duplicate buckets. Items
/// inside each bucket are then sorted by `last_modified` descending (missing
/// timestamps sort as the oldest possible value), and the bucket list itself
/// by (latest item's timestamp descending, name ascending). The result
/// depends only on the input slice, never on hash-map iteration order.
pub fn bucket_items(items: &[ContentItem]) -> Vec<CategoryBucket> {
    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Vec<ContentItem>> = HashMap::new();

    for item in items {
        let name = item.category_or_other();
        if !grouped.contains_key(name) {
            order.push(name.to_string());
        }
        grouped
            .entry(name.to_string())
            .or_default()
            .push(item.clone());
    }

    let mut buckets: Vec<CategoryBucket> = order
        .into_iter()
        .map(|name| {
            let mut items = grouped.remove(&name).unwrap_or_default();
            // Option<DateTime> orders None first, so a descending sort puts
            // undated items last. The sort is stable: ties keep input order.
            items.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
            CategoryBucket { name, items }
        })
        .collect();

    buckets.sort_by(|a, b| {
        b.latest_modified()
            .cmp(&a.latest_modified())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });

    buckets
}
