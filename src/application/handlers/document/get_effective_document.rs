//! GetEffectiveDocumentHandler - Query handler for the document in force
//! at a given instant.

use std::sync::Arc;

use crate::domain::document::{DocumentError, VersionedDocument};
use crate::domain::foundation::Timestamp;
use crate::ports::DocumentReader;

#[derive(Debug, Clone, Copy)]
pub struct GetEffectiveDocumentQuery {
    pub at: Timestamp,
}

/// Handler resolving which active version applies at an instant.
pub struct GetEffectiveDocumentHandler {
    reader: Arc<dyn DocumentReader>,
}

impl GetEffectiveDocumentHandler {
    pub fn new(reader: Arc<dyn DocumentReader>) -> Self {
        Self { reader }
    }

    /// Returns `None` if nothing had taken effect by `query.at`.
    pub async fn handle(
        &self,
        query: GetEffectiveDocumentQuery,
    ) -> Result<Option<VersionedDocument>, DocumentError> {
        Ok(self.reader.find_effective(query.at).await?)
    }
}
