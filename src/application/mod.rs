//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! [`DocumentLifecycleService`] bundles every handler behind one entry point.

pub mod handlers;
mod service;

pub use handlers::{
    ActivateDocumentCommand, ActivateDocumentHandler, CloneDocumentCommand, CloneDocumentHandler,
    CreateDocumentCommand, CreateDocumentHandler, DeleteDocumentCommand, DeleteDocumentHandler,
    GetDocumentHandler, GetDocumentQuery, GetEffectiveDocumentHandler, GetEffectiveDocumentQuery,
    GetLatestDraftHandler, ListDocumentsHandler, ListDocumentsQuery, UpdateDocumentCommand,
    UpdateDocumentHandler, VersionAllocator,
};
pub use service::DocumentLifecycleService;
