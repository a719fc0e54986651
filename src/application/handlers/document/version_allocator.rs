//! Next-version assignment for new documents.
//!
//! Reading the next version and inserting are two separate store calls, so
//! a concurrent writer can claim the version in between. New documents are
//! written with the create-only `insert`; when it reports `VersionTaken`
//! the allocator reads the next version again and retries, up to
//! `max_attempts` times. Any other store failure ends the attempt.

use std::sync::Arc;
use tracing::warn;

use crate::domain::document::{DocumentError, VersionedDocument};
use crate::domain::foundation::Version;
use crate::ports::{DocumentReader, DocumentRepository};

pub struct VersionAllocator {
    reader: Arc<dyn DocumentReader>,
    repository: Arc<dyn DocumentRepository>,
    max_attempts: u32,
}

impl VersionAllocator {
    pub fn new(
        reader: Arc<dyn DocumentReader>,
        repository: Arc<dyn DocumentRepository>,
        max_attempts: u32,
    ) -> Self {
        Self {
            reader,
            repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Builds a document for the next free version and inserts it.
    ///
    /// # Errors
    ///
    /// - `Infrastructure` on store failure, or when every attempt lost the
    ///   race for its version
    pub async fn insert_next<F>(&self, build: F) -> Result<VersionedDocument, DocumentError>
    where
        F: Fn(Version) -> VersionedDocument + Send + Sync,
    {
        let mut attempt = 1;
        loop {
            let version = self.reader.next_version().await?;
            let document = build(version);

            match self.repository.insert(&document).await {
                Ok(stored) => return Ok(stored),
                Err(err) if err.is_version_taken() && attempt < self.max_attempts => {
                    warn!(
                        version = %version,
                        attempt,
                        max_attempts = self.max_attempts,
                        "Version claimed concurrently, retrying with a fresh version"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
