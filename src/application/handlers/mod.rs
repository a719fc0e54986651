//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod document;

pub use document::{
    // Commands
    ActivateDocumentCommand, ActivateDocumentHandler,
    CloneDocumentCommand, CloneDocumentHandler,
    CreateDocumentCommand, CreateDocumentHandler,
    DeleteDocumentCommand, DeleteDocumentHandler,
    UpdateDocumentCommand, UpdateDocumentHandler,
    // Queries
    GetDocumentHandler, GetDocumentQuery,
    GetEffectiveDocumentHandler, GetEffectiveDocumentQuery,
    GetLatestDraftHandler,
    ListDocumentsHandler, ListDocumentsQuery,
    // Version assignment
    VersionAllocator,
};
