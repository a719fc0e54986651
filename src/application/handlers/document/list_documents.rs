//! ListDocumentsHandler - Query handler for paging through documents.

use std::sync::Arc;
use tracing::debug;

use crate::domain::document::{DocumentError, VersionedDocument};
use crate::domain::foundation::{Page, PageRequest};
use crate::ports::DocumentReader;

/// Query for one page of documents, newest version first.
#[derive(Debug, Clone, Copy)]
pub struct ListDocumentsQuery {
    pub page: u32,
    pub limit: u32,
}

impl ListDocumentsQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    fn to_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

/// Handler for listing documents.
pub struct ListDocumentsHandler {
    reader: Arc<dyn DocumentReader>,
}

impl ListDocumentsHandler {
    pub fn new(reader: Arc<dyn DocumentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListDocumentsQuery) -> Result<Page<VersionedDocument>, DocumentError> {
        let page = self.reader.find_all(query.to_page_request()).await?;
        debug!(
            page = query.page,
            limit = query.limit,
            returned = page.len(),
            total = page.info.total,
            "Listed documents"
        );
        Ok(page)
    }
}
