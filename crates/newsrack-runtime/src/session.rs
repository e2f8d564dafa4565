use crate::config::BrowseConfig;
use crate::debounce::TimerToken;
use crate::error::{Error, Result};
use crate::expansion::ExpansionTracker;
use crate::fetch::PageFetcher;
use crate::history::{HistoryStore, RecentSearches};
use crate::paginate::{PaginationStatus, fetch_next, needs_more};
use crate::search_state::{KeyOutcome, SearchState, SuggestionKey};
use crate::store::ContentStore;
use crate::view::{ViewModel, bucket_views};
use newsrack_engine::{allocate, bucket_items, filter_items, suggestions};
use newsrack_types::ContentPage;
use std::time::Instant;

/// One browsing session: the facade a rendering shell drives.
///
/// Owns the store, expansion set, search state, and history exclusively;
/// nothing is shared across sessions. All commands run on one logical
/// thread — the only suspension point is the page fetch, and its result is
/// committed only while the session is still open.
pub struct BrowseSession {
    store: ContentStore,
    expansion: ExpansionTracker,
    search: SearchState,
    history: RecentSearches,
    history_store: Option<Box<dyn HistoryStore>>,
    fetcher: Box<dyn PageFetcher>,
    config: BrowseConfig,
    status: PaginationStatus,
    closed: bool,
}

impl BrowseSession {
    pub fn new(fetcher: Box<dyn PageFetcher>) -> Self {
        Self::with_config(fetcher, BrowseConfig::default())
    }

    pub fn with_config(fetcher: Box<dyn PageFetcher>, config: BrowseConfig) -> Self {
        let search = SearchState::new(config.debounce(), config.blur_grace());
        Self {
            store: ContentStore::new(),
            expansion: ExpansionTracker::new(),
            search,
            history: RecentSearches::new(),
            history_store: None,
            fetcher,
            config,
            status: PaginationStatus::Idle,
            closed: false,
        }
    }

    /// Attach a persistence backend for recent searches and load whatever it
    /// already holds.
    pub fn with_history_store(mut self, store: Box<dyn HistoryStore>) -> Result<Self> {
        self.history = store.load()?;
        self.history_store = Some(store);
        Ok(self)
    }

    /// Hand in a server-rendered first page, skipping the initial fetch.
    pub fn seed(&mut self, page: ContentPage) -> Result<()> {
        self.store.seed(page)?;
        self.status = if self.store.has_more() {
            PaginationStatus::Idle
        } else {
            PaginationStatus::Exhausted
        };
        Ok(())
    }

    // --- commands -----------------------------------------------------------

    /// Keystroke in the search box.
    pub fn on_search_input(&mut self, text: &str, now: Instant) -> TimerToken {
        self.search.set_query(text, now)
    }

    /// Drive the debounce and blur-grace timers. Returns `true` when the
    /// debounced query changed (i.e. the filtered view needs re-rendering).
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        self.search.poll(now)
    }

    /// Expand a category to show all of its items. Never triggers a fetch by
    /// itself.
    pub fn on_expand_category(&mut self, name: &str) {
        self.expansion.expand(name);
    }

    /// Explicit "load more" request. Single-flight: a call while a fetch is
    /// in flight does nothing. A fetch failure leaves every loaded item,
    /// `total`, and `has_more` untouched and flips the pagination status to
    /// `Error`; retrying is the user's call.
    pub async fn on_load_more_requested(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.status = PaginationStatus::Loading;
        let outcome = fetch_next(&mut self.store, self.fetcher.as_ref(), self.config.page_limit).await;

        match outcome {
            Ok(Some(page)) => {
                // Still-relevant guard: a page landing after close is dropped.
                if self.closed {
                    return Ok(());
                }
                self.store.merge(page.items, page.total, page.has_more);
                self.status = self.settled_status();
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                if !self.closed {
                    self.status = PaginationStatus::Error;
                }
                Err(Error::Fetch(e))
            }
        }
    }

    /// Silently fetch until the visible window is no longer close to
    /// exhausting what has been loaded. Stops at the first error, when the
    /// server stops yielding new items, or when the session closes.
    pub async fn ensure_coverage(&mut self) -> Result<()> {
        loop {
            if self.closed {
                return Ok(());
            }

            let buckets = bucket_items(self.store.items());
            let allocation = allocate(&buckets, self.config.reveal_budget);
            if !needs_more(
                &buckets,
                &allocation,
                &self.expansion,
                &self.store,
                self.search.search_active(),
            ) {
                return Ok(());
            }

            self.status = PaginationStatus::Loading;
            match fetch_next(&mut self.store, self.fetcher.as_ref(), self.config.page_limit).await {
                Ok(Some(page)) => {
                    if self.closed {
                        return Ok(());
                    }
                    let added = self.store.merge(page.items, page.total, page.has_more);
                    self.status = self.settled_status();
                    if added == 0 {
                        // The server is repeating itself; stop rather than spin.
                        return Ok(());
                    }
                }
                Ok(None) => return Ok(()),
                Err(e) => {
                    self.status = PaginationStatus::Error;
                    return Err(Error::Fetch(e));
                }
            }
        }
    }

    /// Keyboard input while the suggestion panel has focus.
    pub fn on_suggestion_key(&mut self, key: SuggestionKey) -> Result<KeyOutcome> {
        let current = self.current_suggestions();
        let outcome = self.search.on_key(key, current.len());

        match &outcome {
            KeyOutcome::CommitSelection(i) => {
                if let Some(text) = current.get(*i).cloned() {
                    self.commit_query(&text)?;
                }
            }
            KeyOutcome::CommitRaw(raw) => {
                // The pending debounce still fires with the same value, so
                // only the history changes here.
                let raw = raw.clone();
                self.record_history(&raw)?;
            }
            _ => {}
        }

        Ok(outcome)
    }

    /// Click on a suggestion.
    pub fn on_suggestion_select(&mut self, text: &str) -> Result<()> {
        self.commit_query(text)
    }

    pub fn on_focus(&mut self) {
        self.search.focus();
    }

    pub fn on_blur(&mut self, now: Instant) {
        self.search.blur(now);
    }

    /// Tear the session down: any outstanding fetch continuation or timer
    /// becomes inert.
    pub fn close(&mut self) {
        self.closed = true;
    }

    // --- view ---------------------------------------------------------------

    pub fn view_model(&self) -> ViewModel {
        let current = self.current_suggestions();

        if self.search.search_active() {
            return ViewModel {
                buckets: Vec::new(),
                search_active: true,
                filtered: Some(filter_items(self.store.items(), self.search.debounced())),
                suggestions: current,
                active_suggestion_index: self.search.active_index(),
                suggestions_open: self.search.panel_open(),
                pagination: self.status,
            };
        }

        let buckets = bucket_items(self.store.items());
        let allocation = allocate(&buckets, self.config.reveal_budget);

        ViewModel {
            buckets: bucket_views(&buckets, &allocation, &self.expansion),
            search_active: false,
            filtered: None,
            suggestions: current,
            active_suggestion_index: self.search.active_index(),
            suggestions_open: self.search.panel_open(),
            pagination: self.status,
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn history(&self) -> &RecentSearches {
        &self.history
    }

    pub fn status(&self) -> PaginationStatus {
        self.status
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    // --- internals ----------------------------------------------------------

    fn current_suggestions(&self) -> Vec<String> {
        suggestions(self.search.raw(), self.store.items(), self.history.entries())
    }

    fn settled_status(&self) -> PaginationStatus {
        if self.store.has_more() {
            PaginationStatus::Idle
        } else {
            PaginationStatus::Exhausted
        }
    }

    fn commit_query(&mut self, query: &str) -> Result<()> {
        self.search.commit(query);
        self.record_history(query)
    }

    fn record_history(&mut self, query: &str) -> Result<()> {
        self.history.push(query);
        if let Some(store) = &self.history_store {
            store.save(&self.history)?;
        }
        Ok(())
    }
}
