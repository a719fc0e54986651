//! In-memory document store.
//!
//! Implements both halves of the store in a single `BTreeMap` keyed by
//! version. Useful for tests and local development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::document::VersionedDocument;
use crate::domain::foundation::{DomainError, ErrorCode, Page, PageRequest, Timestamp, Version};
use crate::ports::{DocumentReader, DocumentRepository};

/// In-memory storage for versioned documents.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<BTreeMap<Version, VersionedDocument>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `documents`.
    pub fn with_documents(documents: impl IntoIterator<Item = VersionedDocument>) -> Self {
        let map = documents
            .into_iter()
            .map(|doc| (doc.version(), doc))
            .collect();
        Self {
            documents: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }
}

#[async_trait]
impl DocumentReader for InMemoryDocumentStore {
    async fn find_all(&self, request: PageRequest) -> Result<Page<VersionedDocument>, DomainError> {
        let documents = self.documents.read().await;
        let total = documents.len() as u64;

        if request.limit == 0 {
            return Ok(Page::empty(request, total));
        }

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = documents
            .values()
            .rev()
            .skip(offset)
            .take(request.limit as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, request, total))
    }

    async fn find_by_version(&self, version: Version) -> Result<Option<VersionedDocument>, DomainError> {
        Ok(self.documents.read().await.get(&version).cloned())
    }

    async fn latest_draft(&self) -> Result<Option<VersionedDocument>, DomainError> {
        Ok(self
            .documents
            .read()
            .await
            .values()
            .rev()
            .find(|doc| doc.effective_at().is_none())
            .cloned())
    }

    async fn find_effective(&self, at: Timestamp) -> Result<Option<VersionedDocument>, DomainError> {
        Ok(self
            .documents
            .read()
            .await
            .values()
            .filter_map(|doc| doc.effective_at().map(|effective| (*effective, doc)))
            .filter(|(effective, _)| !effective.is_after(&at))
            .max_by_key(|(effective, doc)| (*effective, doc.version()))
            .map(|(_, doc)| doc.clone()))
    }

    async fn next_version(&self) -> Result<Version, DomainError> {
        Ok(self
            .documents
            .read()
            .await
            .keys()
            .next_back()
            .map(Version::next)
            .unwrap_or(Version::FIRST))
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentStore {
    async fn save(&self, document: &VersionedDocument) -> Result<VersionedDocument, DomainError> {
        let mut documents = self.documents.write().await;
        let stored = match documents.get(&document.version()) {
            // Upsert keeps the original creation time, like the SQL adapter.
            Some(existing) => VersionedDocument::reconstitute(
                document.version(),
                document.content().to_string(),
                document.effective_at().copied(),
                *existing.created_at(),
                *document.updated_at(),
            ),
            None => document.clone(),
        };
        documents.insert(stored.version(), stored.clone());
        Ok(stored)
    }

    async fn insert(&self, document: &VersionedDocument) -> Result<VersionedDocument, DomainError> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(&document.version()) {
            return Err(DomainError::new(
                ErrorCode::VersionTaken,
                format!("Document version {} already exists", document.version()),
            )
            .with_detail("version", document.version().to_string()));
        }
        documents.insert(document.version(), document.clone());
        Ok(document.clone())
    }

    async fn delete_by_version(&self, version: Version) -> Result<(), DomainError> {
        match self.documents.write().await.remove(&version) {
            Some(_) => Ok(()),
            None => Err(DomainError::new(
                ErrorCode::DocumentNotFound,
                format!("Document version {} not found", version),
            )),
        }
    }
}
