use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of committed queries retained.
pub const HISTORY_LIMIT: usize = 5;

/// Bounded, most-recent-first, deduplicated list of committed search queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentSearches {
    #[serde(default)]
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed query. Whitespace is trimmed, empties are ignored,
    /// and a re-committed query moves to the front instead of duplicating.
    pub fn push(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.entries.retain(|e| e != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Persistence seam for recent searches. The engine only ever calls through
/// this trait; where (or whether) the history lands on disk is the host's
/// concern.
pub trait HistoryStore {
    fn load(&self) -> Result<RecentSearches>;
    fn save(&self, history: &RecentSearches) -> Result<()>;
}

/// File-backed history store (TOML).
#[derive(Debug, Clone)]
pub struct TomlHistoryStore {
    path: PathBuf,
}

impl TomlHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the history file location based on priority:
    /// 1. Explicit path (with tilde expansion)
    /// 2. NEWSRACK_PATH environment variable (with tilde expansion)
    /// 3. Platform data directory
    pub fn resolve(explicit_path: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Ok(Self::new(expand_tilde(path)));
        }

        if let Ok(env_path) = std::env::var("NEWSRACK_PATH") {
            return Ok(Self::new(
                expand_tilde(&env_path).join("recent_searches.toml"),
            ));
        }

        if let Some(data_dir) = dirs::data_dir() {
            return Ok(Self::new(data_dir.join("newsrack/recent_searches.toml")));
        }

        Err(Error::Config(
            "Could not determine history path: no data directory found".to_string(),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for TomlHistoryStore {
    fn load(&self) -> Result<RecentSearches> {
        if !self.path.exists() {
            return Ok(RecentSearches::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        // A corrupt history file is not worth failing a session over.
        Ok(toml::from_str(&content).unwrap_or_default())
    }

    fn save(&self, history: &RecentSearches) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(history)
            .map_err(|e| Error::Config(format!("failed to serialize history: {}", e)))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
