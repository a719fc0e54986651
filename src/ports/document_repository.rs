//! Document repository port (write side).
//!
//! Implementations only persist what they are given; lifecycle checks
//! happen before a document reaches this port.

use async_trait::async_trait;

use crate::domain::document::VersionedDocument;
use crate::domain::foundation::{DomainError, Version};

/// Repository port for document writes.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Upserts by version: creates the row if absent, otherwise overwrites
    /// content, effective date and `updated_at`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, document: &VersionedDocument) -> Result<VersionedDocument, DomainError>;

    /// Stores a document under a version that must not exist yet.
    ///
    /// # Errors
    ///
    /// - `VersionTaken` if another document already holds the version
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, document: &VersionedDocument) -> Result<VersionedDocument, DomainError>;

    /// Deletes a document by version.
    ///
    /// # Errors
    ///
    /// - `DocumentNotFound` if no row has the version
    /// - `DatabaseError` on persistence failure
    async fn delete_by_version(&self, version: Version) -> Result<(), DomainError>;
}
