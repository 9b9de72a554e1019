#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use inquiry_desk_core::{
    FilterCriteria, FilterPatch, Inquiry, InquiryPriority, InquiryStats, InquiryStatus,
    InquiryType, Page,
};
use inquiry_desk_storage::{InquiryStore, MemoryStore, StorageError};
use tokio::sync::Notify;

use crate::{DeleteOutcome, InquiryListService};

fn inquiry(id: &str, status: InquiryStatus, minutes_ago: i64) -> Inquiry {
    let created_at = Utc::now() - ChronoDuration::minutes(minutes_ago);
    Inquiry {
        id: id.to_owned(),
        name: format!("Contact {id}"),
        email: format!("{id}@example.com"),
        phone: None,
        company: None,
        inquiry_type: InquiryType::General,
        subject: format!("Subject {id}"),
        message: format!("Message {id}"),
        status,
        priority: InquiryPriority::Medium,
        created_at,
        updated_at: created_at,
    }
}

fn seeded_store() -> MemoryStore {
    MemoryStore::seeded(vec![
        inquiry("p1", InquiryStatus::Pending, 1),
        inquiry("p2", InquiryStatus::Pending, 2),
        inquiry("r1", InquiryStatus::Resolved, 3),
    ])
}

/// Store whose reads can be made to fail on demand.
struct FlakyStore {
    inner: MemoryStore,
    fail_page: AtomicBool,
    fail_stats: AtomicBool,
}

impl FlakyStore {
    fn new(inner: MemoryStore) -> Self {
        Self { inner, fail_page: AtomicBool::new(false), fail_stats: AtomicBool::new(false) }
    }
}

#[async_trait]
impl InquiryStore for FlakyStore {
    async fn fetch_page(&self, criteria: &FilterCriteria) -> Result<Page<Inquiry>, StorageError> {
        if self.fail_page.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("page read failed".to_owned()));
        }
        self.inner.fetch_page(criteria).await
    }

    async fn fetch_stats(&self) -> Result<InquiryStats, StorageError> {
        if self.fail_stats.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("stats read failed".to_owned()));
        }
        self.inner.fetch_stats().await
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        self.inner.delete(id).await
    }
}

/// Store that parks page reads for one specific status filter until
/// released, to simulate a slow response overtaken by a newer one.
struct GatedStore {
    inner: MemoryStore,
    release: Notify,
    gated_status: Option<InquiryStatus>,
}

#[async_trait]
impl InquiryStore for GatedStore {
    async fn fetch_page(&self, criteria: &FilterCriteria) -> Result<Page<Inquiry>, StorageError> {
        if criteria.status == self.gated_status {
            self.release.notified().await;
        }
        self.inner.fetch_page(criteria).await
    }

    async fn fetch_stats(&self) -> Result<InquiryStats, StorageError> {
        self.inner.fetch_stats().await
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        self.inner.delete(id).await
    }
}

/// Store that parks deletes until released, to hold a mutation in flight.
struct GatedDeleteStore {
    inner: MemoryStore,
    release: Notify,
}

#[async_trait]
impl InquiryStore for GatedDeleteStore {
    async fn fetch_page(&self, criteria: &FilterCriteria) -> Result<Page<Inquiry>, StorageError> {
        self.inner.fetch_page(criteria).await
    }

    async fn fetch_stats(&self) -> Result<InquiryStats, StorageError> {
        self.inner.fetch_stats().await
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        self.release.notified().await;
        self.inner.delete(id).await
    }
}

/// Store that reports a total inconsistent with its per-status counts.
struct InconsistentStatsStore {
    inner: MemoryStore,
}

#[async_trait]
impl InquiryStore for InconsistentStatsStore {
    async fn fetch_page(&self, criteria: &FilterCriteria) -> Result<Page<Inquiry>, StorageError> {
        self.inner.fetch_page(criteria).await
    }

    async fn fetch_stats(&self) -> Result<InquiryStats, StorageError> {
        let mut stats = self.inner.fetch_stats().await?;
        stats.total += 1;
        Ok(stats)
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        self.inner.delete(id).await
    }
}

#[tokio::test]
async fn test_refresh_populates_page_and_stats() {
    let service = InquiryListService::new(Arc::new(seeded_store()));
    let state = service.refresh().await;

    assert!(!state.loading);
    assert!(state.last_error.is_none());
    let page = state.page.unwrap();
    assert_eq!(page.info.total_items, 3);
    let stats = state.stats.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.pending, 2);
}

#[tokio::test]
async fn test_set_filter_resets_page_and_queries() {
    let service = InquiryListService::new(Arc::new(seeded_store()));
    service.go_to_page(3).await;

    let state = service
        .set_filter(FilterPatch {
            status: Some(Some(InquiryStatus::Pending)),
            ..FilterPatch::default()
        })
        .await;

    assert_eq!(state.criteria.page, 1);
    assert_eq!(state.criteria.status, Some(InquiryStatus::Pending));
    let page = state.page.unwrap();
    assert_eq!(page.info.total_items, 2);
    assert!(page.items.iter().all(|i| i.status == InquiryStatus::Pending));
}

#[tokio::test]
async fn test_stats_failure_keeps_previous_stats_but_applies_page() {
    let store = Arc::new(FlakyStore::new(seeded_store()));
    let service = InquiryListService::new(Arc::clone(&store) as Arc<dyn InquiryStore>);

    let state = service.refresh().await;
    let original_stats = state.stats.unwrap();

    store.inner.insert(inquiry("p3", InquiryStatus::Pending, 0)).await;
    store.fail_stats.store(true, Ordering::SeqCst);

    let state = service.refresh().await;
    assert!(!state.loading);
    assert_eq!(state.page.unwrap().info.total_items, 4, "page leg still applied");
    assert_eq!(state.stats.unwrap(), original_stats, "stats unchanged from prior value");
    assert!(state.last_error.unwrap().contains("stats read failed"));
}

#[tokio::test]
async fn test_page_failure_keeps_previous_page_but_applies_stats() {
    let store = Arc::new(FlakyStore::new(seeded_store()));
    let service = InquiryListService::new(Arc::clone(&store) as Arc<dyn InquiryStore>);

    service.refresh().await;

    store.inner.insert(inquiry("p3", InquiryStatus::Pending, 0)).await;
    store.fail_page.store(true, Ordering::SeqCst);

    let state = service.refresh().await;
    assert!(!state.loading, "loading clears on failure too");
    assert_eq!(state.page.unwrap().info.total_items, 3, "previous page retained");
    assert_eq!(state.stats.unwrap().total, 4, "stats leg still applied");
    assert!(state.last_error.unwrap().contains("page read failed"));
}

#[tokio::test]
async fn test_read_failure_never_flashes_to_empty() {
    let store = Arc::new(FlakyStore::new(seeded_store()));
    let service = InquiryListService::new(Arc::clone(&store) as Arc<dyn InquiryStore>);

    service.refresh().await;
    store.fail_page.store(true, Ordering::SeqCst);
    store.fail_stats.store(true, Ordering::SeqCst);

    let state = service.refresh().await;
    assert!(state.page.is_some());
    assert!(state.stats.is_some());
    assert!(state.last_error.is_some());
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let store = Arc::new(GatedStore {
        inner: seeded_store(),
        release: Notify::new(),
        gated_status: Some(InquiryStatus::Pending),
    });
    let service =
        Arc::new(InquiryListService::new(Arc::clone(&store) as Arc<dyn InquiryStore>));

    // Cycle A: filter to pending; its page read parks inside the store.
    let slow_service = Arc::clone(&service);
    let slow = tokio::spawn(async move {
        slow_service
            .set_filter(FilterPatch {
                status: Some(Some(InquiryStatus::Pending)),
                ..FilterPatch::default()
            })
            .await
    });
    tokio::time::sleep(Duration::from_millis(20)).await;

    // Cycle B: filter to resolved; completes immediately.
    let state_b = service
        .set_filter(FilterPatch {
            status: Some(Some(InquiryStatus::Resolved)),
            ..FilterPatch::default()
        })
        .await;
    assert!(state_b.page.as_ref().unwrap().items.iter().all(|i| i.id == "r1"));

    // Let A's response arrive late. It must be discarded.
    store.release.notify_one();
    slow.await.unwrap();

    let final_state = service.snapshot();
    let page = final_state.page.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "r1", "view corresponds to B, never A");
    assert!(!final_state.loading);
}

#[tokio::test]
async fn test_concurrent_queries_each_get_their_own_criteria_results() {
    let store = Arc::new(GatedStore {
        inner: seeded_store(),
        release: Notify::new(),
        gated_status: Some(InquiryStatus::Pending),
    });
    let service =
        Arc::new(InquiryListService::new(Arc::clone(&store) as Arc<dyn InquiryStore>));

    // Caller A asks for pending; its page read parks inside the store.
    let slow_service = Arc::clone(&service);
    let slow = tokio::spawn(async move {
        let criteria = FilterCriteria::default().with_status(Some(InquiryStatus::Pending));
        slow_service.query(&criteria).await
    });
    tokio::time::sleep(Duration::from_millis(20)).await;

    // Caller B asks for resolved and completes while A is parked.
    let resolved = service
        .query(&FilterCriteria::default().with_status(Some(InquiryStatus::Resolved)))
        .await
        .unwrap();
    assert!(resolved.page.items.iter().all(|i| i.id == "r1"));

    store.release.notify_one();
    let pending = slow.await.unwrap().unwrap();
    assert_eq!(pending.page.items.len(), 2);
    assert!(
        pending.page.items.iter().all(|i| i.status == InquiryStatus::Pending),
        "the slow caller gets rows for its own criteria, not B's"
    );
}

#[tokio::test]
async fn test_query_does_not_touch_shared_view() {
    let service = InquiryListService::new(Arc::new(seeded_store()));
    service
        .set_criteria(FilterCriteria::default().with_status(Some(InquiryStatus::Resolved)))
        .await;

    let result = service
        .query(&FilterCriteria::default().with_status(Some(InquiryStatus::Pending)))
        .await
        .unwrap();
    assert_eq!(result.page.info.total_items, 2);

    let state = service.snapshot();
    assert_eq!(state.criteria.status, Some(InquiryStatus::Resolved));
    assert_eq!(state.page.unwrap().info.total_items, 1, "shared view untouched");
}

#[tokio::test]
async fn test_stats_read_issues_no_page_query() {
    struct CountingStore {
        inner: MemoryStore,
        page_reads: AtomicUsize,
    }

    #[async_trait]
    impl InquiryStore for CountingStore {
        async fn fetch_page(
            &self,
            criteria: &FilterCriteria,
        ) -> Result<Page<Inquiry>, StorageError> {
            self.page_reads.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_page(criteria).await
        }

        async fn fetch_stats(&self) -> Result<InquiryStats, StorageError> {
            self.inner.fetch_stats().await
        }

        async fn delete(&self, id: &str) -> Result<(), StorageError> {
            self.inner.delete(id).await
        }
    }

    let store =
        Arc::new(CountingStore { inner: seeded_store(), page_reads: AtomicUsize::new(0) });
    let service = InquiryListService::new(Arc::clone(&store) as Arc<dyn InquiryStore>);

    let snapshot = service.stats().await.unwrap();
    assert_eq!(snapshot.stats.total, 3);
    assert_eq!(store.page_reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_delete_refreshes_list_and_stats() {
    let service = InquiryListService::new(Arc::new(seeded_store()));
    service.refresh().await;

    let outcome = service.request_delete("p1").await;
    assert!(outcome.is_deleted());

    let state = service.snapshot();
    assert_eq!(state.page.as_ref().unwrap().info.total_items, 2);
    assert_eq!(state.stats.unwrap().pending, 1);
    assert!(!state.is_deleting("p1"));
}

#[tokio::test]
async fn test_delete_unknown_id_fails_but_still_refreshes() {
    let service = InquiryListService::new(Arc::new(seeded_store()));

    let outcome = service.request_delete("ghost").await;
    let DeleteOutcome::Failed(err) = outcome else {
        panic!("expected a not-found failure");
    };
    assert!(err.is_not_found());

    // The refresh still ran: the view is populated.
    let state = service.snapshot();
    assert_eq!(state.page.as_ref().unwrap().info.total_items, 3);
    assert!(!state.is_deleting("ghost"));
}

#[tokio::test]
async fn test_transient_delete_failure_clears_marker_without_refresh() {
    struct FailingDeleteStore {
        inner: MemoryStore,
    }

    #[async_trait]
    impl InquiryStore for FailingDeleteStore {
        async fn fetch_page(
            &self,
            criteria: &FilterCriteria,
        ) -> Result<Page<Inquiry>, StorageError> {
            self.inner.fetch_page(criteria).await
        }

        async fn fetch_stats(&self) -> Result<InquiryStats, StorageError> {
            self.inner.fetch_stats().await
        }

        async fn delete(&self, _id: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("connection reset".to_owned()))
        }
    }

    let service =
        InquiryListService::new(Arc::new(FailingDeleteStore { inner: seeded_store() }));
    service.refresh().await;
    let before = service.snapshot();

    let outcome = service.request_delete("p1").await;
    let DeleteOutcome::Failed(err) = outcome else {
        panic!("expected a transient failure");
    };
    assert!(err.is_transient());

    let after = service.snapshot();
    assert!(!after.is_deleting("p1"));
    assert_eq!(
        after.page.unwrap().info.total_items,
        before.page.unwrap().info.total_items,
        "row left intact"
    );
}

#[tokio::test]
async fn test_second_delete_of_same_id_is_refused_while_in_flight() {
    let store = Arc::new(GatedDeleteStore { inner: seeded_store(), release: Notify::new() });
    let service =
        Arc::new(InquiryListService::new(Arc::clone(&store) as Arc<dyn InquiryStore>));

    let first_service = Arc::clone(&service);
    let first = tokio::spawn(async move { first_service.request_delete("p1").await });
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(service.snapshot().is_deleting("p1"));
    let second = service.request_delete("p1").await;
    assert!(matches!(second, DeleteOutcome::AlreadyInFlight));

    store.release.notify_one();
    let outcome = first.await.unwrap();
    assert!(outcome.is_deleted());
    assert!(!service.snapshot().is_deleting("p1"));
}

#[tokio::test]
async fn test_inconsistent_stats_surface_warning_without_rejecting() {
    let service =
        InquiryListService::new(Arc::new(InconsistentStatsStore { inner: seeded_store() }));

    let state = service.refresh().await;
    let warning = state.integrity_warning.unwrap();
    assert!(warning.contains("inconsistent stats"));
    assert!(state.stats.is_some(), "snapshot still applied");
}

#[tokio::test]
async fn test_stats_idempotent_without_mutation() {
    let service = InquiryListService::new(Arc::new(seeded_store()));
    let first = service.refresh().await.stats.unwrap();
    let second = service.refresh().await.stats.unwrap();
    assert_eq!(first, second);
}
