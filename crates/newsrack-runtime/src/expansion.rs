use std::collections::HashSet;

/// Buckets the user has manually expanded to "show all".
///
/// Expansion is one-directional within a session: there is no collapse, and
/// the set resets only when the owning view is torn down.
#[derive(Debug, Default)]
pub struct ExpansionTracker {
    expanded: HashSet<String>,
}

impl ExpansionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent.
    pub fn expand(&mut self, bucket_name: &str) {
        self.expanded.insert(bucket_name.to_string());
    }

    pub fn is_expanded(&self, bucket_name: &str) -> bool {
        self.expanded.contains(bucket_name)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
