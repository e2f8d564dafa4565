use crate::error::FetchError;
use crate::item::ContentItem;
use serde::{Deserialize, Serialize};

/// One page of content as returned by `fetch_page(offset, limit)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPage {
    pub items: Vec<ContentItem>,
    pub total: usize,
    pub has_more: bool,
}

impl ContentPage {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            has_more: false,
        }
    }

    /// Validate and decode a raw response body into a page.
    ///
    /// The remote service has been observed to return error objects and bare
    /// nulls with a 200 status, so the shape check happens here rather than
    /// at the transport layer.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, FetchError> {
        serde_json::from_value(value)
            .map_err(|e| FetchError::MalformedResponse(format!("invalid page payload: {}", e)))
    }
}
