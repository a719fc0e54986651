//! ActivateDocumentHandler - Command handler for the one-way draft to active
//! transition.

use std::sync::Arc;
use tracing::info;

use super::fetch_existing;
use crate::domain::document::{rules, DocumentError, VersionedDocument};
use crate::domain::foundation::{Timestamp, Version};
use crate::ports::{Clock, DocumentReader, DocumentRepository};

/// Command to activate a draft as of `effective_at`.
///
/// `effective_at` may lie in the past or the future.
#[derive(Debug, Clone, Copy)]
pub struct ActivateDocumentCommand {
    pub version: Version,
    pub effective_at: Timestamp,
}

pub struct ActivateDocumentHandler {
    reader: Arc<dyn DocumentReader>,
    repository: Arc<dyn DocumentRepository>,
    clock: Arc<dyn Clock>,
}

impl ActivateDocumentHandler {
    pub fn new(
        reader: Arc<dyn DocumentReader>,
        repository: Arc<dyn DocumentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reader,
            repository,
            clock,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` if the version does not exist
    /// - `Conflict` if the document is already active
    pub async fn handle(&self, cmd: ActivateDocumentCommand) -> Result<VersionedDocument, DocumentError> {
        // 1. Load current state
        let current = fetch_existing(self.reader.as_ref(), cmd.version).await?;

        // 2. Transition
        let activated = rules::activate(&current, cmd.effective_at, self.clock.now())?;

        // 3. Persist
        let stored = self.repository.save(&activated).await?;

        info!(
            version = %stored.version(),
            effective_at = %cmd.effective_at,
            "Document activated"
        );
        Ok(stored)
    }
}
