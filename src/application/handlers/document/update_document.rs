//! UpdateDocumentHandler - Command handler for editing draft content.

use std::sync::Arc;
use tracing::info;

use super::fetch_existing;
use crate::domain::document::{rules, DocumentError, VersionedDocument};
use crate::domain::foundation::Version;
use crate::ports::{Clock, DocumentReader, DocumentRepository};

/// Command to replace the content of a draft.
#[derive(Debug, Clone)]
pub struct UpdateDocumentCommand {
    pub version: Version,
    pub content: String,
}

pub struct UpdateDocumentHandler {
    reader: Arc<dyn DocumentReader>,
    repository: Arc<dyn DocumentRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateDocumentHandler {
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
    /// - `Conflict` if the document is active
    pub async fn handle(&self, cmd: UpdateDocumentCommand) -> Result<VersionedDocument, DocumentError> {
        // 1. Load current state
        let current = fetch_existing(self.reader.as_ref(), cmd.version).await?;

        // 2. Apply rule
        let updated = rules::update_content(&current, cmd.content, self.clock.now())?;

        // 3. Persist
        let stored = self.repository.save(&updated).await?;

        info!(version = %stored.version(), "Draft content updated");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn cmd(version: i32, content: &str) -> UpdateDocumentCommand {
        UpdateDocumentCommand {
            version: Version::new(version),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn updates_draft_content_and_refreshes_timestamp() {
        let store = store_with([draft(1, "old")]);
        let handler = UpdateDocumentHandler::new(store.clone(), store.clone(), clock(2_000));

        let doc = handler.handle(cmd(1, "new")).await.unwrap();

        assert_eq!(doc.content(), "new");
        assert_eq!(doc.created_at(), &at(100));
        assert_eq!(doc.updated_at(), &at(2_000));
        let stored = store.find_by_version(Version::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.content(), "new");
    }

    #[tokio::test]
    async fn active_document_is_conflict_and_unchanged() {
        let store = store_with([active(1, "locked", 500)]);
        let handler = UpdateDocumentHandler::new(store.clone(), store.clone(), clock(2_000));

        let err = handler.handle(cmd(1, "edit")).await.unwrap_err();

        assert!(err.is_conflict());
        let stored = store.find_by_version(Version::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.content(), "locked");
    }

    #[tokio::test]
    async fn missing_version_is_not_found() {
        let store = empty_store();
        let handler = UpdateDocumentHandler::new(store.clone(), store, clock(2_000));
        assert!(handler.handle(cmd(9, "x")).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn save_failure_is_infrastructure() {
        let store = store_with([draft(1, "old")]);
        let handler = UpdateDocumentHandler::new(
            store.clone(),
            Arc::new(ReadOnlyStore),
            clock(2_000),
        );
        assert!(handler.handle(cmd(1, "x")).await.unwrap_err().is_infrastructure());
    }
}
