//! DocumentLifecycleService - single entry point for the document lifecycle.
//!
//! Wires the handlers to one reader, one repository and one clock, and is
//! the only place that logs store failures. Callers see nothing but
//! [`DocumentError`].

use std::sync::Arc;
use tracing::warn;

use super::handlers::{
    ActivateDocumentCommand, ActivateDocumentHandler, CloneDocumentCommand, CloneDocumentHandler,
    CreateDocumentCommand, CreateDocumentHandler, DeleteDocumentCommand, DeleteDocumentHandler,
    GetDocumentHandler, GetDocumentQuery, GetEffectiveDocumentHandler, GetEffectiveDocumentQuery,
    GetLatestDraftHandler, ListDocumentsHandler, ListDocumentsQuery, UpdateDocumentCommand,
    UpdateDocumentHandler, VersionAllocator,
};
use crate::config::LifecycleConfig;
use crate::domain::document::{DocumentError, VersionedDocument};
use crate::domain::foundation::{Page, Timestamp, Version};
use crate::ports::{Clock, DocumentReader, DocumentRepository};

pub struct DocumentLifecycleService {
    clock: Arc<dyn Clock>,
    list: ListDocumentsHandler,
    get: GetDocumentHandler,
    latest_draft: GetLatestDraftHandler,
    effective: GetEffectiveDocumentHandler,
    create: CreateDocumentHandler,
    update: UpdateDocumentHandler,
    delete: DeleteDocumentHandler,
    clone: CloneDocumentHandler,
    activate: ActivateDocumentHandler,
}

impl DocumentLifecycleService {
    pub fn new(
        reader: Arc<dyn DocumentReader>,
        repository: Arc<dyn DocumentRepository>,
        clock: Arc<dyn Clock>,
        config: &LifecycleConfig,
    ) -> Self {
        let allocator = Arc::new(VersionAllocator::new(
            reader.clone(),
            repository.clone(),
            config.max_version_attempts,
        ));

        Self {
            list: ListDocumentsHandler::new(reader.clone()),
            get: GetDocumentHandler::new(reader.clone()),
            latest_draft: GetLatestDraftHandler::new(reader.clone()),
            effective: GetEffectiveDocumentHandler::new(reader.clone()),
            create: CreateDocumentHandler::new(allocator.clone(), clock.clone()),
            update: UpdateDocumentHandler::new(reader.clone(), repository.clone(), clock.clone()),
            delete: DeleteDocumentHandler::new(reader.clone(), repository.clone()),
            clone: CloneDocumentHandler::new(reader.clone(), allocator, clock.clone()),
            activate: ActivateDocumentHandler::new(reader, repository, clock.clone()),
            clock,
        }
    }

    /// Builds a service over a store that implements both ports.
    pub fn from_store<S>(store: Arc<S>, clock: Arc<dyn Clock>, config: &LifecycleConfig) -> Self
    where
        S: DocumentReader + DocumentRepository + 'static,
    {
        Self::new(store.clone(), store, clock, config)
    }

    /// One page of documents, highest version first.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Page<VersionedDocument>, DocumentError> {
        let result = self.list.handle(ListDocumentsQuery::new(page, limit)).await;
        observe("list", result)
    }

    pub async fn get_by_version(&self, version: Version) -> Result<VersionedDocument, DocumentError> {
        let result = self.get.handle(GetDocumentQuery { version }).await;
        observe("get_by_version", result)
    }

    /// Creates a draft under the next free version.
    pub async fn create(&self, content: impl Into<String>) -> Result<VersionedDocument, DocumentError> {
        let result = self
            .create
            .handle(CreateDocumentCommand {
                content: content.into(),
            })
            .await;
        observe("create", result)
    }

    /// Replaces the content of a draft.
    pub async fn update(
        &self,
        version: Version,
        content: impl Into<String>,
    ) -> Result<VersionedDocument, DocumentError> {
        let result = self
            .update
            .handle(UpdateDocumentCommand {
                version,
                content: content.into(),
            })
            .await;
        observe("update", result)
    }

    pub async fn delete(&self, version: Version) -> Result<(), DocumentError> {
        let result = self.delete.handle(DeleteDocumentCommand { version }).await;
        observe("delete", result)
    }

    /// Copies `source_version` into a new draft. Works for drafts and active
    /// documents alike.
    pub async fn clone_version(&self, source_version: Version) -> Result<VersionedDocument, DocumentError> {
        let result = self
            .clone
            .handle(CloneDocumentCommand { source_version })
            .await;
        observe("clone", result)
    }

    /// Activates a draft. `effective_at` is taken as given, past or future.
    pub async fn activate(
        &self,
        version: Version,
        effective_at: Timestamp,
    ) -> Result<VersionedDocument, DocumentError> {
        let result = self
            .activate
            .handle(ActivateDocumentCommand {
                version,
                effective_at,
            })
            .await;
        observe("activate", result)
    }

    /// The draft with the highest version, if any.
    pub async fn latest_draft(&self) -> Result<Option<VersionedDocument>, DocumentError> {
        let result = self.latest_draft.handle().await;
        observe("latest_draft", result)
    }

    /// The active document in force at `at`.
    pub async fn effective_at(&self, at: Timestamp) -> Result<Option<VersionedDocument>, DocumentError> {
        let result = self.effective.handle(GetEffectiveDocumentQuery { at }).await;
        observe("effective_at", result)
    }

    /// The active document in force now.
    pub async fn current(&self) -> Result<Option<VersionedDocument>, DocumentError> {
        self.effective_at(self.clock.now()).await
    }
}

fn observe<T>(operation: &'static str, result: Result<T, DocumentError>) -> Result<T, DocumentError> {
    if let Err(DocumentError::Infrastructure(cause)) = &result {
        warn!(operation, code = %cause.code, error = %cause, "Document store failure");
    }
    result
}
