use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

fn default_page_limit() -> usize {
    20
}

fn default_reveal_budget() -> usize {
    newsrack_engine::REVEAL_BUDGET
}

fn default_debounce_ms() -> u64 {
    180
}

fn default_blur_grace_ms() -> u64 {
    200
}

/// Tunables for one browsing session. Every field has a default, so an
/// absent or partial config file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Items requested per page fetch.
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,

    /// Items revealed across all buckets before any manual expansion.
    #[serde(default = "default_reveal_budget")]
    pub reveal_budget: usize,

    /// Quiet period between the last keystroke and the debounced query.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Grace delay between blur and the suggestion panel closing.
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_limit: default_page_limit(),
            reveal_budget: default_reveal_budget(),
            debounce_ms: default_debounce_ms(),
            blur_grace_ms: default_blur_grace_ms(),
        }
    }
}

impl BrowseConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("invalid config: {}", e)))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}
