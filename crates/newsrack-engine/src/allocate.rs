use crate::bucket::CategoryBucket;
use std::collections::HashMap;

/// Total number of items revealed across all buckets before any manual
/// expansion.
pub const REVEAL_BUDGET: usize = 12;

/// Per-bucket ceiling on the initial reveal.
pub const BUCKET_REVEAL_CAP: usize = 4;

/// Compute how many items each bucket shows before the user expands anything.
///
/// Walks buckets in their sorted order, revealing
/// `min(BUCKET_REVEAL_CAP, bucket.len(), remaining)` from each and consuming
/// the budget left to right. Once the budget runs out every later bucket gets
/// 0 and is not rendered until expanded. Earlier buckets can starve later
/// ones; there is no even-split or at-least-one guarantee.
pub fn allocate(buckets: &[CategoryBucket], budget: usize) -> HashMap<String, usize> {
    let mut remaining = budget;
    let mut allocation = HashMap::with_capacity(buckets.len());

    for bucket in buckets {
        let reveal = BUCKET_REVEAL_CAP.min(bucket.items.len()).min(remaining);
        remaining -= reveal;
        allocation.insert(bucket.name.clone(), reveal);
    }

    allocation
}
