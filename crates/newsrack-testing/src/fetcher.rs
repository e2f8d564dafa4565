use futures::future::BoxFuture;
use newsrack_runtime::PageFetcher;
use newsrack_types::{ContentPage, FetchError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A `PageFetcher` that replays a queued script of responses and records
/// every `(offset, limit)` it was asked for.
///
/// An exhausted script answers with an empty, `has_more = false` page so
/// over-eager callers fail assertions on `calls()` rather than panicking.
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<ContentPage, FetchError>>>,
    calls: Mutex<Vec<(usize, usize)>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(self, page: ContentPage) -> Self {
        self.script
            .lock()
            .expect("script lock")
            .push_back(Ok(page));
        self
    }

    pub fn fail(self, err: FetchError) -> Self {
        self.script
            .lock()
            .expect("script lock")
            .push_back(Err(err));
        self
    }

    /// Every `(offset, limit)` pair requested so far, in order.
    pub fn calls(&self) -> Vec<(usize, usize)> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }
}

impl Default for ScriptedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher for ScriptedFetcher {
    fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'_, Result<ContentPage, FetchError>> {
        Box::pin(async move {
            self.calls.lock().expect("calls lock").push((offset, limit));
            self.script
                .lock()
                .expect("script lock")
                .pop_front()
                .unwrap_or_else(|| Ok(ContentPage::empty()))
        })
    }
}
