//! Shared fixtures for handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::adapters::clock::FixedClock;
use crate::adapters::memory::InMemoryDocumentStore;
use crate::domain::document::{rules, VersionedDocument};
use crate::domain::foundation::{DomainError, Page, PageRequest, Timestamp, Version};
use crate::ports::{DocumentReader, DocumentRepository};

pub fn at(secs: i64) -> Timestamp {
    Timestamp::from_unix_secs(secs).unwrap()
}

pub fn clock(secs: i64) -> Arc<FixedClock> {
    Arc::new(FixedClock::new(at(secs)))
}

pub fn draft(version: i32, content: &str) -> VersionedDocument {
    rules::new_draft(Version::new(version), content, at(100))
}

pub fn active(version: i32, content: &str, effective_secs: i64) -> VersionedDocument {
    rules::activate(&draft(version, content), at(effective_secs), at(150)).unwrap()
}

pub fn store_with(documents: impl IntoIterator<Item = VersionedDocument>) -> Arc<InMemoryDocumentStore> {
    Arc::new(InMemoryDocumentStore::with_documents(documents))
}

pub fn empty_store() -> Arc<InMemoryDocumentStore> {
    Arc::new(InMemoryDocumentStore::new())
}

fn unavailable() -> DomainError {
    DomainError::database("Simulated failure", "connection refused")
}

/// Store whose every call fails.
pub struct FailingStore;

#[async_trait]
impl DocumentReader for FailingStore {
    async fn find_all(&self, _request: PageRequest) -> Result<Page<VersionedDocument>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_version(&self, _version: Version) -> Result<Option<VersionedDocument>, DomainError> {
        Err(unavailable())
    }

    async fn latest_draft(&self) -> Result<Option<VersionedDocument>, DomainError> {
        Err(unavailable())
    }

    async fn find_effective(&self, _at: Timestamp) -> Result<Option<VersionedDocument>, DomainError> {
        Err(unavailable())
    }

    async fn next_version(&self) -> Result<Version, DomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl DocumentRepository for FailingStore {
    async fn save(&self, _document: &VersionedDocument) -> Result<VersionedDocument, DomainError> {
        Err(unavailable())
    }

    async fn insert(&self, _document: &VersionedDocument) -> Result<VersionedDocument, DomainError> {
        Err(unavailable())
    }

    async fn delete_by_version(&self, _version: Version) -> Result<(), DomainError> {
        Err(unavailable())
    }
}

/// Repository that refuses every write; pair it with a real reader.
pub struct ReadOnlyStore;

#[async_trait]
impl DocumentRepository for ReadOnlyStore {
    async fn save(&self, _document: &VersionedDocument) -> Result<VersionedDocument, DomainError> {
        Err(unavailable())
    }

    async fn insert(&self, _document: &VersionedDocument) -> Result<VersionedDocument, DomainError> {
        Err(unavailable())
    }

    async fn delete_by_version(&self, _version: Version) -> Result<(), DomainError> {
        Err(unavailable())
    }
}

/// Reader that reports a stale next version for its first `stale_reads`
/// calls, as a concurrent writer would cause.
pub struct StaleVersionReader {
    pub inner: Arc<InMemoryDocumentStore>,
    pub stale: Version,
    pub stale_reads: u32,
    pub calls: AtomicU32,
}

impl StaleVersionReader {
    pub fn new(inner: Arc<InMemoryDocumentStore>, stale: Version, stale_reads: u32) -> Self {
        Self {
            inner,
            stale,
            stale_reads,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentReader for StaleVersionReader {
    async fn find_all(&self, request: PageRequest) -> Result<Page<VersionedDocument>, DomainError> {
        self.inner.find_all(request).await
    }

    async fn find_by_version(&self, version: Version) -> Result<Option<VersionedDocument>, DomainError> {
        self.inner.find_by_version(version).await
    }

    async fn latest_draft(&self) -> Result<Option<VersionedDocument>, DomainError> {
        self.inner.latest_draft().await
    }

    async fn find_effective(&self, at: Timestamp) -> Result<Option<VersionedDocument>, DomainError> {
        self.inner.find_effective(at).await
    }

    async fn next_version(&self) -> Result<Version, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.stale_reads {
            Ok(self.stale)
        } else {
            self.inner.next_version().await
        }
    }
}
