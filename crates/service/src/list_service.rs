//! Orchestration of the admin inquiry list.
//!
//! One user-visible loading cycle covers the page read and the stats read.
//! The two reads run concurrently and are applied independently: a failure
//! in one leg never blocks the other leg's result. Each cycle carries a
//! generation number; a cycle whose generation has been superseded by a
//! newer one discards its results on arrival, so a slow early request can
//! never overwrite a newer, faster one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use inquiry_desk_core::{FilterCriteria, FilterPatch, Inquiry, InquiryStats, Page};
use inquiry_desk_storage::InquiryStore;

use crate::error::ServiceError;
use crate::view_state::ListViewState;

/// Result of a delete request.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// Record deleted; the view has been refreshed.
    Deleted,
    /// A delete for this id is already in flight; no second request was
    /// issued.
    AlreadyInFlight,
    /// The boundary rejected or failed the delete. Other rows' state is
    /// untouched.
    Failed(ServiceError),
}

impl DeleteOutcome {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        matches!(*self, Self::Deleted)
    }
}

/// Page and stats for one caller-supplied criteria set, independent of the
/// shared view.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub page: Page<Inquiry>,
    /// Stats snapshot, absent when the stats leg failed.
    pub stats: Option<InquiryStats>,
    pub integrity_warning: Option<String>,
}

/// Result of a stats-only read.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub stats: InquiryStats,
    pub integrity_warning: Option<String>,
}

/// Coordinates the query executor, stats aggregator, and mutation executor
/// over one exclusively-owned [`ListViewState`].
pub struct InquiryListService {
    store: Arc<dyn InquiryStore>,
    state: Mutex<ListViewState>,
    generation: AtomicU64,
}

impl InquiryListService {
    #[must_use]
    pub fn new(store: Arc<dyn InquiryStore>) -> Self {
        Self { store, state: Mutex::new(ListViewState::default()), generation: AtomicU64::new(0) }
    }

    /// Read-only copy of the current view state.
    #[must_use]
    pub fn snapshot(&self) -> ListViewState {
        self.lock_state().clone()
    }

    /// Replace the criteria wholesale (the criteria lifecycle: constructed
    /// fresh per interaction, never field-merged) and run a fetch cycle.
    pub async fn set_criteria(&self, criteria: FilterCriteria) -> ListViewState {
        {
            let mut state = self.lock_state();
            state.criteria = criteria.normalized();
        }
        self.run_cycle().await
    }

    /// Apply a partial filter update (page resets to 1 for any touched
    /// filter field) and run a fetch cycle.
    pub async fn set_filter(&self, patch: FilterPatch) -> ListViewState {
        {
            let mut state = self.lock_state();
            state.criteria = state.criteria.clone().apply(patch).normalized();
        }
        self.run_cycle().await
    }

    /// Move to another page without touching the other criteria, then run
    /// a fetch cycle.
    pub async fn go_to_page(&self, page: u64) -> ListViewState {
        {
            let mut state = self.lock_state();
            state.criteria = state.criteria.clone().with_page(page).normalized();
        }
        self.run_cycle().await
    }

    /// Re-run the fetch cycle against the current criteria.
    pub async fn refresh(&self) -> ListViewState {
        self.run_cycle().await
    }

    /// One-shot read for the given criteria, bypassing the shared view
    /// state entirely. Concurrent callers each receive the results of
    /// their own criteria; per-request surfaces use this instead of the
    /// stateful cycle, which answers with whichever cycle is newest.
    /// The page read is required; a failed stats leg leaves `stats`
    /// empty rather than failing the whole read.
    pub async fn query(&self, criteria: &FilterCriteria) -> Result<QueryResult, ServiceError> {
        let criteria = criteria.clone().normalized();
        let (page_result, stats_result) =
            tokio::join!(self.store.fetch_page(&criteria), self.store.fetch_stats());

        let page = page_result?;
        match stats_result {
            Ok(stats) => {
                let integrity_warning = check_integrity(&stats);
                Ok(QueryResult { page, stats: Some(stats), integrity_warning })
            },
            Err(err) => {
                tracing::warn!(error = %err, "stats read failed; answering with page only");
                Ok(QueryResult { page, stats: None, integrity_warning: None })
            },
        }
    }

    /// Stats-only read. No page query is issued.
    pub async fn stats(&self) -> Result<StatsSnapshot, ServiceError> {
        let stats = self.store.fetch_stats().await?;
        let integrity_warning = check_integrity(&stats);
        Ok(StatsSnapshot { stats, integrity_warning })
    }

    /// Delete one inquiry after the presentation layer has confirmed the
    /// action. The id is marked in flight before the outbound call so a
    /// second request for the same id is refused, not duplicated. Success
    /// and not-found both trigger a full refresh; the view is never
    /// spliced locally.
    pub async fn request_delete(&self, id: &str) -> DeleteOutcome {
        {
            let mut state = self.lock_state();
            if !state.deleting.insert(id.to_owned()) {
                return DeleteOutcome::AlreadyInFlight;
            }
        }

        let result = self.store.delete(id).await;

        {
            let mut state = self.lock_state();
            state.deleting.remove(id);
        }

        match result {
            Ok(()) => {
                self.run_cycle().await;
                DeleteOutcome::Deleted
            },
            Err(err) if err.is_not_found() => {
                // The record disappeared underneath the view; refresh so
                // the list and counts agree with the boundary again.
                tracing::warn!(id, "delete target not found");
                self.run_cycle().await;
                DeleteOutcome::Failed(err.into())
            },
            Err(err) => {
                tracing::warn!(id, error = %err, "delete failed");
                DeleteOutcome::Failed(err.into())
            },
        }
    }

    /// One fetch cycle: issue the page and stats reads concurrently, then
    /// apply whatever arrived, leg by leg, unless a newer cycle has been
    /// issued in the meantime.
    async fn run_cycle(&self) -> ListViewState {
        let (generation, criteria) = {
            let mut state = self.lock_state();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.loading = true;
            (generation, state.criteria.clone())
        };

        let (page_result, stats_result) =
            tokio::join!(self.store.fetch_page(&criteria), self.store.fetch_stats());

        let mut state = self.lock_state();
        if generation != self.generation.load(Ordering::SeqCst) {
            tracing::debug!(generation, "discarding superseded fetch cycle");
            return state.clone();
        }

        state.loading = false;
        state.last_error = None;

        match page_result {
            Ok(page) => state.page = Some(page),
            Err(err) => {
                tracing::warn!(error = %err, "page fetch failed; keeping previous page");
                state.last_error = Some(err.to_string());
            },
        }

        match stats_result {
            Ok(stats) => {
                state.integrity_warning = check_integrity(&stats);
                state.stats = Some(stats);
            },
            Err(err) => {
                tracing::warn!(error = %err, "stats fetch failed; keeping previous stats");
                let message = err.to_string();
                state.last_error = match state.last_error.take() {
                    Some(existing) => Some(format!("{existing}; {message}")),
                    None => Some(message),
                };
            },
        }

        state.clone()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ListViewState> {
        // Held only for synchronous transitions, never across an await.
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn check_integrity(stats: &InquiryStats) -> Option<String> {
    stats.integrity_error().map(|err| {
        tracing::warn!(error = %err, "stats snapshot failed integrity check");
        err.to_string()
    })
}
