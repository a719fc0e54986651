//! CloneDocumentHandler - Command handler for starting a new draft from an
//! existing version.

use std::sync::Arc;
use tracing::info;

use super::{fetch_existing, VersionAllocator};
use crate::domain::document::{rules, DocumentError, VersionedDocument};
use crate::domain::foundation::Version;
use crate::ports::{Clock, DocumentReader};

#[derive(Debug, Clone, Copy)]
pub struct CloneDocumentCommand {
    pub source_version: Version,
}

/// Handler for cloning. Drafts and active documents are both valid sources.
pub struct CloneDocumentHandler {
    reader: Arc<dyn DocumentReader>,
    allocator: Arc<VersionAllocator>,
    clock: Arc<dyn Clock>,
}

impl CloneDocumentHandler {
    pub fn new(
        reader: Arc<dyn DocumentReader>,
        allocator: Arc<VersionAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reader,
            allocator,
            clock,
        }
    }

    pub async fn handle(&self, cmd: CloneDocumentCommand) -> Result<VersionedDocument, DocumentError> {
        let source = fetch_existing(self.reader.as_ref(), cmd.source_version).await?;
        let now = self.clock.now();

        let copy = self
            .allocator
            .insert_next(|version| rules::clone_as_draft(&source, version, now))
            .await?;

        info!(
            source_version = %cmd.source_version,
            version = %copy.version(),
            "Document cloned into new draft"
        );
        Ok(copy)
    }
}
