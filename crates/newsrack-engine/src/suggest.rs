use newsrack_types::ContentItem;

/// Maximum number of autocomplete entries shown at once.
pub const SUGGESTION_LIMIT: usize = 5;

/// Derive autocomplete suggestions for the live (non-debounced) query.
///
/// A non-empty query yields up to five distinct item titles whose lowercase
/// form contains the lowercase query, in the items' existing order (first
/// match wins). An empty query falls back to the recent-search history, which
/// is already bounded upstream.
pub fn suggestions(raw_query: &str, items: &[ContentItem], recent: &[String]) -> Vec<String> {
    if raw_query.trim().is_empty() {
        return recent.to_vec();
    }

    let needle = raw_query.to_lowercase();
    let mut out: Vec<String> = Vec::with_capacity(SUGGESTION_LIMIT);

    for item in items {
        let Some(title) = item.title.as_deref() else {
            continue;
        };
        if title.to_lowercase().contains(&needle) && !out.iter().any(|t| t == title) {
            out.push(title.to_string());
            if out.len() == SUGGESTION_LIMIT {
                break;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(id: &str, title: &str) -> ContentItem {
        let mut it = ContentItem::new(id);
        it.title = Some(title.to_string());
        it
    }

    #[test]
    fn returns_at_most_five_matches_in_item_order() {
        let items: Vec<ContentItem> = (0..8)
            .map(|i| titled(&i.to_string(), &format!("Visa update {}", i)))
            .collect();
        let out = suggestions("visa", &items, &[]);
        assert_eq!(out.len(), SUGGESTION_LIMIT);
        assert_eq!(out[0], "Visa update 0");
        assert_eq!(out[4], "Visa update 4");
    }

    #[test]
    fn duplicate_titles_appear_once() {
        let items = vec![titled("a", "Fees"), titled("b", "Fees"), titled("c", "Fee waiver")];
        let out = suggestions("fee", &items, &[]);
        assert_eq!(out, ["Fees", "Fee waiver"]);
    }

    #[test]
    fn empty_query_returns_history_verbatim() {
        let recent = vec!["visa".to_string(), "fees".to_string()];
        assert_eq!(suggestions("", &[], &recent), recent);
        assert_eq!(suggestions("   ", &[], &recent), recent);
    }

    #[test]
    fn untitled_items_are_skipped() {
        let items = vec![ContentItem::new("a"), titled("b", "Guide")];
        assert_eq!(suggestions("gui", &items, &[]), ["Guide"]);
    }
}
