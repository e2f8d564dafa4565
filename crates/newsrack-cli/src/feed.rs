use anyhow::{Context, Result};
use futures::future::BoxFuture;
use newsrack_runtime::PageFetcher;
use newsrack_types::{ContentItem, ContentPage, FetchError};
use std::path::Path;

/// A `PageFetcher` over a local JSON file holding the complete item array,
/// served back in fixed-size slices the way the remote service pages its
/// responses.
pub struct JsonFeedFetcher {
    items: Vec<ContentItem>,
}

impl JsonFeedFetcher {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read feed file {}", path.display()))?;
        let items: Vec<ContentItem> = serde_json::from_str(&content)
            .with_context(|| format!("feed file {} is not a JSON item array", path.display()))?;
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PageFetcher for JsonFeedFetcher {
    fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'_, std::result::Result<ContentPage, FetchError>> {
        Box::pin(async move {
            let total = self.items.len();
            let start = offset.min(total);
            let end = (offset + limit).min(total);
            Ok(ContentPage {
                items: self.items[start..end].to_vec(),
                total,
                has_more: end < total,
            })
        })
    }
}
