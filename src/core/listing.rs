//! Listing query controller.
//!
//! Owns the search/sort/filter tuple and the committed file collection.
//! Search keystrokes update the query signal immediately (the input never
//! lags) but schedule their fetch through a quiet-interval debounce; sort
//! and filter changes fetch immediately. Every fetch carries a sequence
//! number from [`FetchSequencer`]; a completing fetch whose number is no
//! longer current is discarded, so the displayed collection always reflects
//! the latest issued query, not the latest network completion.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::SEARCH_DEBOUNCE_MS;
use crate::core::api;
use crate::core::error::ApiError;
use crate::core::session::SessionState;
use crate::models::{
    bump_record_view, prepend_records, remove_record, FileRecord, ListingQuery, SortKey,
    TypeFilter,
};

/// Monotonic fetch sequencing: "last query wins", independent of network
/// completion order.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    current: u64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether a fetch started with `seq` is still the latest.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.current
    }
}

/// Listing state managed with Leptos signals.
///
/// The committed collection in `files` is mutated only here (server-result
/// replacement, delete, view-count bump) and by the upload coordinator
/// through [`ListingState::prepend`].
#[derive(Clone, Copy)]
pub struct ListingState {
    /// The current query; input controls bind to this directly.
    pub query: RwSignal<ListingQuery>,
    /// The committed file collection, in display order.
    pub files: RwSignal<Vec<FileRecord>>,
    /// Whether the latest issued fetch is still in flight.
    pub loading: RwSignal<bool>,
    /// Component-scoped message from the last failed fetch.
    pub error: RwSignal<Option<String>>,
    sequencer: RwSignal<FetchSequencer>,
    /// Generation counter for pending debounced fetches; bumping it cancels
    /// whatever is still waiting out its quiet interval.
    debounce_epoch: RwSignal<u64>,
}

impl ListingState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(ListingQuery::default()),
            files: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            sequencer: RwSignal::new(FetchSequencer::new()),
            debounce_epoch: RwSignal::new(0),
        }
    }

    /// Update the search text immediately and schedule a fetch once the
    /// field has been stable for the quiet interval.
    pub fn set_search_text(self, session: SessionState, text: String) {
        self.query.update(|q| q.search_text = text);

        let epoch = self.debounce_epoch.get_untracked() + 1;
        self.debounce_epoch.set(epoch);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if self.debounce_epoch.get_untracked() == epoch {
                self.fetch_now(session);
            }
        });
    }

    /// Sort selection is discrete; fetch immediately.
    pub fn set_sort(self, session: SessionState, key: SortKey) {
        if self.query.with_untracked(|q| q.sort_key) == key {
            return;
        }
        self.query.update(|q| q.sort_key = key);
        self.fetch_now(session);
    }

    /// Filter selection is discrete; fetch immediately.
    pub fn set_type_filter(self, session: SessionState, filter: TypeFilter) {
        if self.query.with_untracked(|q| q.type_filter) == filter {
            return;
        }
        self.query.update(|q| q.type_filter = filter);
        self.fetch_now(session);
    }

    /// Reset to the default query and fetch exactly once, immediately.
    pub fn clear_filters(self, session: SessionState) {
        self.query.set(ListingQuery::default());
        self.fetch_now(session);
    }

    /// Fetch with the current query (initial load, manual refresh).
    pub fn refresh(self, session: SessionState) {
        self.fetch_now(session);
    }

    fn fetch_now(self, session: SessionState) {
        // An immediate fetch supersedes any pending debounced one; without
        // this a sort change right after typing would fetch twice.
        self.debounce_epoch.update(|e| *e += 1);

        let Some(token) = session.token() else {
            session.expire();
            return;
        };

        let seq = self
            .sequencer
            .try_update(|s| s.begin())
            .unwrap_or_default();
        self.loading.set(true);
        self.error.set(None);
        let query = self.query.get_untracked();

        spawn_local(async move {
            let result = api::list_files(&query, &token).await;

            // Superseded: a newer fetch owns the collection and the
            // loading indicator now.
            if !self.sequencer.with_untracked(|s| s.is_current(seq)) {
                return;
            }
            self.loading.set(false);

            match result {
                Ok(files) => self.files.set(files),
                Err(e) if e.is_auth_failure() => session.expire(),
                Err(e) => {
                    web_sys::console::error_1(&format!("listing fetch failed: {}", e).into());
                    self.error.set(Some(e.to_string()));
                }
            }
        });
    }

    /// Delete a file: backend first, collection only on success. The edit
    /// is applied to whatever collection is current at completion time.
    pub async fn delete(self, session: SessionState, id: &str) -> Result<(), ApiError> {
        let Some(token) = session.token() else {
            session.expire();
            return Err(ApiError::Unauthorized);
        };
        match api::delete_file(id, &token).await {
            Ok(()) => {
                self.files.update(|files| {
                    remove_record(files, id);
                });
                Ok(())
            }
            Err(e) => {
                if e.is_auth_failure() {
                    session.expire();
                }
                Err(e)
            }
        }
    }

    /// Bump a file's view counter: backend first, collection only on
    /// success; no re-fetch.
    pub async fn bump_view(self, session: SessionState, id: &str) -> Result<(), ApiError> {
        let Some(token) = session.token() else {
            session.expire();
            return Err(ApiError::Unauthorized);
        };
        match api::bump_view_count(id, &token).await {
            Ok(()) => {
                self.files.update(|files| {
                    bump_record_view(files, id);
                });
                Ok(())
            }
            Err(e) => {
                if e.is_auth_failure() {
                    session.expire();
                }
                Err(e)
            }
        }
    }

    /// Publish freshly uploaded records at the front of the collection.
    /// Only the upload coordinator calls this.
    pub fn prepend(self, records: Vec<FileRecord>) {
        self.files.update(|files| prepend_records(files, records));
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_numbers_increase() {
        let mut sequencer = FetchSequencer::new();
        let a = sequencer.begin();
        let b = sequencer.begin();
        assert!(b > a);
    }

    #[test]
    fn test_last_query_wins_over_completion_order() {
        let mut sequencer = FetchSequencer::new();
        let a = sequencer.begin();
        let b = sequencer.begin();

        // B completes first and commits
        assert!(sequencer.is_current(b));
        // A completes later; its result must be discarded
        assert!(!sequencer.is_current(a));
    }

    #[test]
    fn test_single_fetch_is_current() {
        let mut sequencer = FetchSequencer::new();
        let seq = sequencer.begin();
        assert!(sequencer.is_current(seq));
    }

    #[test]
    fn test_stale_sequence_stays_stale() {
        let mut sequencer = FetchSequencer::new();
        let a = sequencer.begin();
        let _b = sequencer.begin();
        let _c = sequencer.begin();
        // No later completion revives an earlier query
        assert!(!sequencer.is_current(a));
    }
}
