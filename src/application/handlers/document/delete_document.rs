//! DeleteDocumentHandler - Command handler for removing drafts.

use std::sync::Arc;
use tracing::info;

use super::fetch_existing;
use crate::domain::document::{rules, DocumentError};
use crate::domain::foundation::{ErrorCode, Version};
use crate::ports::{DocumentReader, DocumentRepository};

#[derive(Debug, Clone, Copy)]
pub struct DeleteDocumentCommand {
    pub version: Version,
}

/// Handler for deleting drafts. Active documents are permanent.
pub struct DeleteDocumentHandler {
    reader: Arc<dyn DocumentReader>,
    repository: Arc<dyn DocumentRepository>,
}

impl DeleteDocumentHandler {
    pub fn new(reader: Arc<dyn DocumentReader>, repository: Arc<dyn DocumentRepository>) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(&self, cmd: DeleteDocumentCommand) -> Result<(), DocumentError> {
        let current = fetch_existing(self.reader.as_ref(), cmd.version).await?;
        rules::ensure_deletable(&current)?;

        self.repository
            .delete_by_version(cmd.version)
            .await
            .map_err(|err| match err.code {
                // Removed between the read and the delete.
                ErrorCode::DocumentNotFound => DocumentError::NotFound(cmd.version),
                _ => DocumentError::Infrastructure(err),
            })?;

        info!(version = %cmd.version, "Draft deleted");
        Ok(())
    }
}
