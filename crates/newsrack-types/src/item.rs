use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel bucket for items whose category is missing or blank.
pub const OTHER_CATEGORY: &str = "Other";

/// A single piece of content as reported by the remote data service.
///
/// Only `id` is required; every other field may be absent in a page payload.
/// The engine interprets `title`, `description`, `category`, and
/// `last_modified`; `author`, `image`, and `attribution` are opaque display
/// data carried through to the view model untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub attribution: Option<String>,
}

impl ContentItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            category: None,
            last_modified: None,
            author: None,
            image: None,
            attribution: None,
        }
    }

    /// The bucket name this item belongs to. Blank categories collapse into
    /// the shared "Other" bucket rather than forming whitespace-keyed groups.
    pub fn category_or_other(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => OTHER_CATEGORY,
        }
    }

    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_maps_to_other() {
        let mut item = ContentItem::new("a");
        assert_eq!(item.category_or_other(), OTHER_CATEGORY);

        item.category = Some("   ".to_string());
        assert_eq!(item.category_or_other(), OTHER_CATEGORY);

        item.category = Some("News".to_string());
        assert_eq!(item.category_or_other(), "News");
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let item: ContentItem = serde_json::from_str(r#"{"id":"p1"}"#).unwrap();
        assert_eq!(item.id, "p1");
        assert!(item.title.is_none());
        assert!(item.last_modified.is_none());
    }
}
