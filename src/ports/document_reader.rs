//! Document reader port (read side / queries).
//!
//! Absence is never an error here: lookups that miss return `Ok(None)`.
//! `Err` means the store itself failed.

use async_trait::async_trait;

use crate::domain::document::VersionedDocument;
use crate::domain::foundation::{DomainError, Page, PageRequest, Timestamp, Version};

/// Reader port for document queries.
#[async_trait]
pub trait DocumentReader: Send + Sync {
    /// Lists documents ordered by version descending.
    ///
    /// `request` is not validated; `limit = 0` yields an empty page with
    /// zero pages.
    async fn find_all(&self, request: PageRequest) -> Result<Page<VersionedDocument>, DomainError>;

    /// Finds a document by its version.
    async fn find_by_version(&self, version: Version) -> Result<Option<VersionedDocument>, DomainError>;

    /// Returns the draft with the highest version, if any.
    async fn latest_draft(&self) -> Result<Option<VersionedDocument>, DomainError>;

    /// Returns the active document in force at `at`.
    ///
    /// That is the one with the latest `effective_at <= at`, ties going to
    /// the higher version.
    async fn find_effective(&self, at: Timestamp) -> Result<Option<VersionedDocument>, DomainError>;

    /// Returns `1` for an empty store, otherwise the highest version + 1.
    ///
    /// Not atomic with any later write.
    async fn next_version(&self) -> Result<Version, DomainError>;
}
