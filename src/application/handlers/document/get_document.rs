//! GetDocumentHandler - Query handler for a single version.

use std::sync::Arc;

use super::fetch_existing;
use crate::domain::document::{DocumentError, VersionedDocument};
use crate::domain::foundation::Version;
use crate::ports::DocumentReader;

#[derive(Debug, Clone, Copy)]
pub struct GetDocumentQuery {
    pub version: Version,
}

/// Handler for retrieving a document by version.
pub struct GetDocumentHandler {
    reader: Arc<dyn DocumentReader>,
}

impl GetDocumentHandler {
    pub fn new(reader: Arc<dyn DocumentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetDocumentQuery) -> Result<VersionedDocument, DocumentError> {
        fetch_existing(self.reader.as_ref(), query.version).await
    }
}
