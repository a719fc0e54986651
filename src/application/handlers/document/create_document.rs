//! CreateDocumentHandler - Command handler for creating new drafts.

use std::sync::Arc;
use tracing::info;

use super::VersionAllocator;
use crate::domain::document::{rules, DocumentError, VersionedDocument};
use crate::ports::Clock;

/// Command to create a new draft.
#[derive(Debug, Clone)]
pub struct CreateDocumentCommand {
    pub content: String,
}

/// Handler for creating drafts under the next free version.
pub struct CreateDocumentHandler {
    allocator: Arc<VersionAllocator>,
    clock: Arc<dyn Clock>,
}

impl CreateDocumentHandler {
    pub fn new(allocator: Arc<VersionAllocator>, clock: Arc<dyn Clock>) -> Self {
        Self { allocator, clock }
    }

    pub async fn handle(&self, cmd: CreateDocumentCommand) -> Result<VersionedDocument, DocumentError> {
        let now = self.clock.now();
        let document = self
            .allocator
            .insert_next(|version| rules::new_draft(version, cmd.content.as_str(), now))
            .await?;

        info!(version = %document.version(), "Draft created");
        Ok(document)
    }
}
