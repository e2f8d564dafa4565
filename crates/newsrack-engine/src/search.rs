use newsrack_types::ContentItem;
use regex::RegexBuilder;

/// One segment of highlighted text. Adjacent spans reassemble the original
/// string exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    pub matched: bool,
}

/// Case-insensitive substring match against title, description, and category.
pub fn matches_query(item: &ContentItem, query: &str) -> bool {
    let needle = query.to_lowercase();
    let hit = |field: Option<&str>| {
        field
            .map(|f| f.to_lowercase().contains(&needle))
            .unwrap_or(false)
    };

    hit(item.title.as_deref()) || hit(item.description.as_deref()) || hit(item.category.as_deref())
}

/// Filter items by the debounced query.
///
/// An empty or whitespace-only query returns every item unchanged. Filtering
/// never re-sorts: survivors keep their relative order from the input slice.
pub fn filter_items(items: &[ContentItem], query: &str) -> Vec<ContentItem> {
    let query = query.trim();
    if query.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| matches_query(item, query))
        .cloned()
        .collect()
}

/// Split `text` into spans marking case-insensitive occurrences of `query`.
///
/// The query is escaped before being compiled, so user input containing
/// pattern metacharacters (`.*+?^$(){}` and friends) matches literally
/// instead of breaking the pattern. An empty or whitespace-only query
/// disables highlighting and returns the text as a single unmatched span.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    let unhighlighted = || {
        vec![HighlightSpan {
            text: text.to_string(),
            matched: false,
        }]
    };

    let query = query.trim();
    if query.is_empty() || text.is_empty() {
        return unhighlighted();
    }

    let re = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        // Unreachable for an escaped literal, but a plain render beats a panic.
        Err(_) => return unhighlighted(),
    };

    let mut spans = Vec::new();
    let mut cursor = 0;
    for m in re.find_iter(text) {
        if m.start() > cursor {
            spans.push(HighlightSpan {
                text: text[cursor..m.start()].to_string(),
                matched: false,
            });
        }
        spans.push(HighlightSpan {
            text: m.as_str().to_string(),
            matched: true,
        });
        cursor = m.end();
    }
    if cursor < text.len() {
        spans.push(HighlightSpan {
            text: text[cursor..].to_string(),
            matched: false,
        });
    }

    if spans.is_empty() { unhighlighted() } else { spans }
}
