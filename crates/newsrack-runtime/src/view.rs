use crate::expansion::ExpansionTracker;
use crate::paginate::PaginationStatus;
use newsrack_engine::CategoryBucket;
use newsrack_types::ContentItem;
use serde::Serialize;
use std::collections::HashMap;

/// One rendered category section.
#[derive(Debug, Clone, Serialize)]
pub struct BucketView {
    pub name: String,
    pub visible_items: Vec<ContentItem>,
    pub total_items: usize,
    pub is_expanded: bool,
}

/// Everything the rendering layer consumes.
///
/// `buckets` and `filtered` are mutually exclusive: with an active search the
/// flat filtered list replaces the category sections entirely (search results
/// are deliberately not regrouped).
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub buckets: Vec<BucketView>,
    pub search_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered: Option<Vec<ContentItem>>,
    pub suggestions: Vec<String>,
    pub active_suggestion_index: Option<usize>,
    pub suggestions_open: bool,
    pub pagination: PaginationStatus,
}

/// Apply allocation and expansion to sorted buckets.
///
/// A bucket allocated zero reveals and never expanded is dropped from the
/// view entirely rather than rendered as an empty header.
pub fn bucket_views(
    buckets: &[CategoryBucket],
    allocation: &HashMap<String, usize>,
    expansion: &ExpansionTracker,
) -> Vec<BucketView> {
    buckets
        .iter()
        .filter_map(|bucket| {
            let is_expanded = expansion.is_expanded(&bucket.name);
            let visible = if is_expanded {
                bucket.items.len()
            } else {
                allocation.get(&bucket.name).copied().unwrap_or(0)
            };

            if visible == 0 {
                return None;
            }

            Some(BucketView {
                name: bucket.name.clone(),
                visible_items: bucket.items[..visible.min(bucket.items.len())].to_vec(),
                total_items: bucket.items.len(),
                is_expanded,
            })
        })
        .collect()
}
