// Runtime module - stateful orchestration for one browsing session.
// Pure logic lives in newsrack-engine; this layer owns the mutable pieces
// (store, expansion, search state, history) and the single async seam
// (page fetching), and assembles the view model a renderer consumes.

pub mod config;
pub mod debounce;
pub mod error;
pub mod expansion;
pub mod fetch;
pub mod history;
pub mod paginate;
pub mod search_state;
pub mod session;
pub mod store;
pub mod view;

pub use config::BrowseConfig;
pub use debounce::{DebounceTimer, TimerToken};
pub use error::{Error, Result};
pub use expansion::ExpansionTracker;
pub use fetch::PageFetcher;
pub use history::{HISTORY_LIMIT, HistoryStore, RecentSearches, TomlHistoryStore};
pub use paginate::{NEAR_EXHAUSTION_MARGIN, PaginationStatus, fetch_next, needs_more};
pub use search_state::{KeyOutcome, SearchState, SuggestionKey};
pub use session::BrowseSession;
pub use store::ContentStore;
pub use view::{BucketView, ViewModel};
