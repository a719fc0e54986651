//! Document lifecycle error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Version};

/// Operations refused on an active document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockedAction {
    Update,
    Delete,
    Activate,
}

impl std::fmt::Display for LockedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LockedAction::Update => "updated",
            LockedAction::Delete => "deleted",
            LockedAction::Activate => "activated again",
        };
        write!(f, "{}", s)
    }
}

/// A lifecycle rule rejected the requested change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Document version {version} is already active and cannot be {action}")]
    AlreadyActive {
        version: Version,
        action: LockedAction,
    },
}

/// Errors returned by the lifecycle service.
///
/// Callers only ever see these three kinds.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// The requested version does not exist.
    #[error("Document version {0} not found")]
    NotFound(Version),

    /// The document's current state forbids the operation.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The store failed for reasons unrelated to business rules.
    #[error("Infrastructure failure: {0}")]
    Infrastructure(#[source] DomainError),
}

impl DocumentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DocumentError::NotFound(_) => ErrorCode::DocumentNotFound,
            DocumentError::Conflict(_) => ErrorCode::DocumentActive,
            DocumentError::Infrastructure(cause) if cause.code.is_infrastructure() => cause.code,
            DocumentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DocumentError::Conflict(_))
    }

    pub fn is_infrastructure(&self) -> bool {
        matches!(self, DocumentError::Infrastructure(_))
    }
}

impl From<RuleViolation> for DocumentError {
    fn from(violation: RuleViolation) -> Self {
        DocumentError::Conflict(violation.to_string())
    }
}

impl From<DomainError> for DocumentError {
    fn from(err: DomainError) -> Self {
        DocumentError::Infrastructure(err)
    }
}
