//! GetLatestDraftHandler - Query handler for the newest draft.

use std::sync::Arc;

use crate::domain::document::{DocumentError, VersionedDocument};
use crate::ports::DocumentReader;

/// Handler returning the draft with the highest version.
pub struct GetLatestDraftHandler {
    reader: Arc<dyn DocumentReader>,
}

impl GetLatestDraftHandler {
    pub fn new(reader: Arc<dyn DocumentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Option<VersionedDocument>, DocumentError> {
        Ok(self.reader.latest_draft().await?)
    }
}
