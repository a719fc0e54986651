//! Document lifecycle handlers.
//!
//! One handler per operation. Queries go through the reader port; commands
//! load through the reader, apply a pure rule from
//! [`rules`](crate::domain::document::rules), then write through the
//! repository port.

mod activate_document;
mod clone_document;
mod create_document;
mod delete_document;
mod get_document;
mod get_effective_document;
mod get_latest_draft;
mod list_documents;
mod update_document;
mod version_allocator;

#[cfg(test)]
mod test_support;

pub use activate_document::{ActivateDocumentCommand, ActivateDocumentHandler};
pub use clone_document::{CloneDocumentCommand, CloneDocumentHandler};
pub use create_document::{CreateDocumentCommand, CreateDocumentHandler};
pub use delete_document::{DeleteDocumentCommand, DeleteDocumentHandler};
pub use get_document::{GetDocumentHandler, GetDocumentQuery};
pub use get_effective_document::{GetEffectiveDocumentHandler, GetEffectiveDocumentQuery};
pub use get_latest_draft::GetLatestDraftHandler;
pub use list_documents::{ListDocumentsHandler, ListDocumentsQuery};
pub use update_document::{UpdateDocumentCommand, UpdateDocumentHandler};
pub use version_allocator::VersionAllocator;

use crate::domain::document::{DocumentError, VersionedDocument};
use crate::domain::foundation::Version;
use crate::ports::DocumentReader;

/// Loads a document that must exist.
async fn fetch_existing(
    reader: &dyn DocumentReader,
    version: Version,
) -> Result<VersionedDocument, DocumentError> {
    reader
        .find_by_version(version)
        .await?
        .ok_or(DocumentError::NotFound(version))
}
