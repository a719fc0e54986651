//! Integration tests for the document lifecycle.
//!
//! Drives `DocumentLifecycleService` end to end over the in-memory store
//! with a fixed clock:
//! 1. Version assignment for create and clone
//! 2. The one-way draft to active transition
//! 3. Deletion of drafts only
//! 4. Pagination and effective-date lookups

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use policy_ledger::adapters::{FixedClock, InMemoryDocumentStore};
use policy_ledger::application::DocumentLifecycleService;
use policy_ledger::config::LifecycleConfig;
use policy_ledger::domain::document::{DocumentError, DocumentStatus};
use policy_ledger::domain::foundation::{ErrorCode, Timestamp, Version};
use policy_ledger::ports::DocumentReader;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    service: Arc<DocumentLifecycleService>,
    store: Arc<InMemoryDocumentStore>,
    clock: Arc<FixedClock>,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(LifecycleConfig::default())
    }

    fn with_config(config: LifecycleConfig) -> Self {
        let store = Arc::new(InMemoryDocumentStore::new());
        let clock = Arc::new(FixedClock::new(ts("2024-01-01T00:00:00Z")));
        let service = Arc::new(DocumentLifecycleService::from_store(
            store.clone(),
            clock.clone(),
            &config,
        ));
        Self {
            service,
            store,
            clock,
        }
    }
}

fn ts(value: &str) -> Timestamp {
    Timestamp::parse_rfc3339(value).unwrap()
}

fn v(value: i32) -> Version {
    Version::new(value)
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn creates_sequential_drafts_from_empty_store() {
    let h = Harness::new();

    let first = h.service.create("v1 text").await.unwrap();
    let second = h.service.create("v2 text").await.unwrap();

    assert_eq!(first.version(), v(1));
    assert_eq!(first.status(), DocumentStatus::Draft);
    assert_eq!(second.version(), v(2));
    assert_eq!(second.status(), DocumentStatus::Draft);
}

#[tokio::test]
async fn activated_document_rejects_update() {
    let h = Harness::new();
    h.service.create("v1 text").await.unwrap();

    let active = h
        .service
        .activate(v(1), ts("2024-01-15T00:00:00Z"))
        .await
        .unwrap();
    assert_eq!(active.effective_at(), Some(&ts("2024-01-15T00:00:00Z")));

    let err = h.service.update(v(1), "new text").await.unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.code(), ErrorCode::DocumentActive);
    assert_eq!(
        h.service.get_by_version(v(1)).await.unwrap().content(),
        "v1 text"
    );
}

#[tokio::test]
async fn only_drafts_can_be_deleted() {
    let h = Harness::new();
    h.service.create("v1 text").await.unwrap();
    h.service.create("v2 text").await.unwrap();
    h.service
        .activate(v(1), ts("2024-01-15T00:00:00Z"))
        .await
        .unwrap();

    assert!(h.service.delete(v(1)).await.unwrap_err().is_conflict());
    h.service.delete(v(2)).await.unwrap();

    let err = h.service.get_by_version(v(2)).await.unwrap_err();
    assert!(matches!(err, DocumentError::NotFound(missing) if missing == v(2)));
    assert!(h.service.get_by_version(v(1)).await.is_ok());
}

#[tokio::test]
async fn cloning_active_document_yields_new_draft() {
    let h = Harness::new();
    h.service.create("v1 text").await.unwrap();
    h.service.create("v2 text").await.unwrap();
    h.service
        .activate(v(1), ts("2024-01-15T00:00:00Z"))
        .await
        .unwrap();

    let copy = h.service.clone_version(v(1)).await.unwrap();

    assert_eq!(copy.version(), v(3));
    assert_eq!(copy.content(), "v1 text");
    assert!(copy.effective_at().is_none());

    let source = h.service.get_by_version(v(1)).await.unwrap();
    assert_eq!(source.status(), DocumentStatus::Active);
}

#[tokio::test]
async fn second_page_of_twenty_five() {
    let h = Harness::new();
    for i in 1..=25 {
        h.service.create(format!("document {i}")).await.unwrap();
    }

    let page = h.service.list(2, 10).await.unwrap();

    assert_eq!(page.len(), 10);
    assert_eq!(page.info.total, 25);
    assert_eq!(page.info.total_pages, 3);
    assert!(page.info.has_next);
    assert!(page.info.has_prev);
}

// =============================================================================
// Properties
// =============================================================================

#[tokio::test]
async fn versions_are_distinct_and_next_follows_count() {
    let h = Harness::new();
    let mut seen = HashSet::new();

    for i in 0..6 {
        let doc = if i % 2 == 0 {
            h.service.create("fresh").await.unwrap()
        } else {
            h.service.clone_version(v(1)).await.unwrap()
        };
        assert!(seen.insert(doc.version()));
    }

    assert_eq!(h.store.next_version().await.unwrap(), v(7));
}

#[tokio::test]
async fn activation_is_one_way() {
    let h = Harness::new();
    h.service.create("text").await.unwrap();
    h.service
        .activate(v(1), ts("2024-02-01T00:00:00Z"))
        .await
        .unwrap();

    assert!(h
        .service
        .activate(v(1), ts("2024-03-01T00:00:00Z"))
        .await
        .unwrap_err()
        .is_conflict());
    assert!(h.service.update(v(1), "x").await.unwrap_err().is_conflict());
    assert!(h.service.delete(v(1)).await.unwrap_err().is_conflict());

    let stored = h.service.get_by_version(v(1)).await.unwrap();
    assert_eq!(stored.effective_at(), Some(&ts("2024-02-01T00:00:00Z")));
}

#[tokio::test]
async fn clone_keeps_content_at_clone_time() {
    let h = Harness::new();
    h.service.create("before").await.unwrap();

    let copy = h.service.clone_version(v(1)).await.unwrap();
    h.service.update(v(1), "after").await.unwrap();

    assert_ne!(copy.version(), v(1));
    assert_eq!(
        h.service.get_by_version(copy.version()).await.unwrap().content(),
        "before"
    );
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let h = Harness::new();
    let created = h.service.create("Policy text\nwith two lines").await.unwrap();

    let fetched = h.service.get_by_version(created.version()).await.unwrap();

    assert_eq!(fetched.content(), "Policy text\nwith two lines");
    assert!(fetched.effective_at().is_none());
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_versions_are_not_found_everywhere() {
    let h = Harness::new();

    assert!(h.service.get_by_version(v(1)).await.unwrap_err().is_not_found());
    assert!(h.service.update(v(1), "x").await.unwrap_err().is_not_found());
    assert!(h.service.delete(v(1)).await.unwrap_err().is_not_found());
    assert!(h.service.clone_version(v(1)).await.unwrap_err().is_not_found());
    assert!(h
        .service
        .activate(v(1), ts("2024-01-15T00:00:00Z"))
        .await
        .unwrap_err()
        .is_not_found());
}

// =============================================================================
// Effective-date lookups
// =============================================================================

#[tokio::test]
async fn effective_document_follows_activation_dates() {
    let h = Harness::new();
    h.service.create("January").await.unwrap();
    h.service.create("March").await.unwrap();
    h.service.create("Pending").await.unwrap();
    h.service
        .activate(v(1), ts("2024-01-01T00:00:00Z"))
        .await
        .unwrap();
    h.service
        .activate(v(2), ts("2024-03-01T00:00:00Z"))
        .await
        .unwrap();

    let feb = h
        .service
        .effective_at(ts("2024-02-15T00:00:00Z"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(feb.content(), "January");

    assert!(h
        .service
        .effective_at(ts("2023-12-31T23:59:59Z"))
        .await
        .unwrap()
        .is_none());

    h.clock.set(ts("2024-06-01T00:00:00Z"));
    let now = h.service.current().await.unwrap().unwrap();
    assert_eq!(now.content(), "March");

    let draft = h.service.latest_draft().await.unwrap().unwrap();
    assert_eq!(draft.version(), v(3));
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_versions() {
    const WRITERS: u32 = 8;
    let h = Harness::with_config(LifecycleConfig {
        max_version_attempts: WRITERS,
    });

    let tasks: Vec<_> = (0..WRITERS)
        .map(|i| {
            let service = h.service.clone();
            tokio::spawn(async move { service.create(format!("writer {i}")).await })
        })
        .collect();

    let mut versions = HashSet::new();
    for task in tasks {
        let doc = task.await.unwrap().unwrap();
        assert!(versions.insert(doc.version()));
    }

    assert_eq!(versions.len(), WRITERS as usize);
    assert_eq!(h.store.len().await, WRITERS as usize);
}

// =============================================================================
// Pagination
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn listing_is_idempotent_and_consistent(total in 0usize..40, limit in 1u32..12) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        runtime.block_on(async {
            let h = Harness::new();
            for i in 0..total {
                h.service.create(format!("doc {i}")).await.unwrap();
            }

            let total_pages = h.service.list(1, limit).await.unwrap().info.total_pages;
            let mut listed = 0usize;

            for page in 1..=total_pages.max(1) as u32 {
                let first = h.service.list(page, limit).await.unwrap();
                let second = h.service.list(page, limit).await.unwrap();
                assert_eq!(&first, &second);

                assert_eq!(first.info.total, total as u64);
                assert_eq!(first.info.has_prev, page > 1);
                assert_eq!(first.info.has_next, (page as u64) < first.info.total_pages);
                assert!(first.len() <= limit as usize);
                listed += first.len();
            }

            assert_eq!(listed, total);
        });
    }
}
