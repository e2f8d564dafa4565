use crate::debounce::{DebounceTimer, TimerToken};
use std::time::{Duration, Instant};

/// Keyboard input relevant to the suggestion panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// What a key press amounted to. The caller resolves `CommitSelection`
/// against the suggestion list it rendered, since this state machine does
/// not hold suggestion text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Moved,
    CommitSelection(usize),
    CommitRaw(String),
    PanelClosed,
    Cleared,
}

/// Raw and debounced query, suggestion-panel lifecycle, and the selection
/// cursor.
///
/// The raw query updates on every keystroke and feeds autocomplete; the
/// debounced query lags it by one quiet period and feeds filtering. Closing
/// the panel on blur is deferred by a short grace delay so a click on a
/// suggestion registers before the panel is torn down.
#[derive(Debug)]
pub struct SearchState {
    raw: String,
    debounced: String,
    debounce: DebounceTimer,
    blur_close: DebounceTimer,
    panel_open: bool,
    active_index: Option<usize>,
}

impl SearchState {
    pub fn new(quiet: Duration, blur_grace: Duration) -> Self {
        Self {
            raw: String::new(),
            debounced: String::new(),
            debounce: DebounceTimer::new(quiet),
            blur_close: DebounceTimer::new(blur_grace),
            panel_open: false,
            active_index: None,
        }
    }

    /// Record a keystroke: the raw query updates immediately, the debounced
    /// update is (re)scheduled, the panel opens, and the selection resets.
    pub fn set_query(&mut self, raw: &str, now: Instant) -> TimerToken {
        self.raw = raw.to_string();
        self.panel_open = true;
        self.active_index = None;
        self.blur_close.cancel();
        self.debounce.schedule(raw, now)
    }

    /// Drive both timers. Returns `true` when the debounced query changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(value) = self.debounce.poll(now) {
            changed = value != self.debounced;
            self.debounced = value;
        }
        if self.blur_close.poll(now).is_some() {
            self.panel_open = false;
            self.active_index = None;
        }
        changed
    }

    /// Deliver a wall-clock debounce callback. Stale tokens are inert.
    pub fn fire_debounce(&mut self, token: TimerToken) -> bool {
        if let Some(value) = self.debounce.fire(token) {
            let changed = value != self.debounced;
            self.debounced = value;
            changed
        } else {
            false
        }
    }

    /// Adopt a committed query (suggestion click or Enter on a selection):
    /// raw and debounced update together, the pending timer dies, and the
    /// panel closes.
    pub fn commit(&mut self, query: &str) {
        self.raw = query.to_string();
        self.debounced = query.to_string();
        self.debounce.cancel();
        self.panel_open = false;
        self.active_index = None;
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.debounced.clear();
        self.debounce.cancel();
        self.panel_open = false;
        self.active_index = None;
    }

    pub fn focus(&mut self) {
        self.blur_close.cancel();
        self.panel_open = true;
        self.active_index = None;
    }

    /// Schedule the deferred panel close.
    pub fn blur(&mut self, now: Instant) {
        self.blur_close.schedule("", now);
    }

    pub fn on_key(&mut self, key: SuggestionKey, suggestion_count: usize) -> KeyOutcome {
        match key {
            SuggestionKey::Down => {
                if suggestion_count == 0 {
                    return KeyOutcome::Ignored;
                }
                self.active_index = Some(match self.active_index {
                    Some(i) => (i + 1) % suggestion_count,
                    None => 0,
                });
                KeyOutcome::Moved
            }
            SuggestionKey::Up => {
                if suggestion_count == 0 {
                    return KeyOutcome::Ignored;
                }
                self.active_index = Some(match self.active_index {
                    Some(i) => (i + suggestion_count - 1) % suggestion_count,
                    None => suggestion_count - 1,
                });
                KeyOutcome::Moved
            }
            SuggestionKey::Enter => {
                if let Some(i) = self.active_index
                    && i < suggestion_count
                {
                    self.panel_open = false;
                    self.active_index = None;
                    return KeyOutcome::CommitSelection(i);
                }
                if self.raw.trim().is_empty() {
                    return KeyOutcome::Ignored;
                }
                self.panel_open = false;
                KeyOutcome::CommitRaw(self.raw.clone())
            }
            SuggestionKey::Escape => {
                if self.panel_open {
                    self.panel_open = false;
                    self.active_index = None;
                    KeyOutcome::PanelClosed
                } else {
                    self.clear();
                    KeyOutcome::Cleared
                }
            }
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn debounced(&self) -> &str {
        &self.debounced
    }

    /// A search is active once the debounced query is non-blank; only then
    /// does filtering bypass category bucketing.
    pub fn search_active(&self) -> bool {
        !self.debounced.trim().is_empty()
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn debounce_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }
}
