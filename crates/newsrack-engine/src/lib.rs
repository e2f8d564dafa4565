// Engine module - pure browsing logic (bucketing, allocation, search, suggestions)
// This layer sits between the content store (runtime) and view-model assembly.
// Everything here is deterministic: same input snapshot, same output.

pub mod allocate;
pub mod bucket;
pub mod search;
pub mod suggest;

pub use allocate::{BUCKET_REVEAL_CAP, REVEAL_BUDGET, allocate};
pub use bucket::{CategoryBucket, bucket_items};
pub use search::{HighlightSpan, filter_items, highlight, matches_query};
pub use suggest::{SUGGESTION_LIMIT, suggestions};
