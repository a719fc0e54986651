//! VersionedDocument aggregate entity.
//!
//! A document is identified by its version number. Drafts may be edited,
//! activated or deleted; active documents are permanent.

use serde::{Deserialize, Serialize};

use super::state::{DocumentState, DocumentStatus};
use crate::domain::foundation::{Timestamp, Version};

/// A single version of the policy document.
///
/// # Invariants
///
/// - `version` never changes once assigned
/// - state moves only from `Draft` to `Active`
/// - content changes only while in `Draft`
///
/// Instances are only produced by the lifecycle rules or reconstituted
/// from storage; the rules return new values instead of mutating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionedDocument {
    version: Version,
    content: String,
    #[serde(flatten)]
    state: DocumentState,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl VersionedDocument {
    pub(super) fn build(
        version: Version,
        content: String,
        state: DocumentState,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            version,
            content,
            state,
            created_at,
            updated_at,
        }
    }

    /// Reconstitute a document from persistence (no validation).
    pub fn reconstitute(
        version: Version,
        content: String,
        effective_at: Option<Timestamp>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self::build(
            version,
            content,
            DocumentState::from_effective_at(effective_at),
            created_at,
            updated_at,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    pub fn status(&self) -> DocumentStatus {
        self.state.status()
    }

    /// The instant the document took effect; `None` while a draft.
    pub fn effective_at(&self) -> Option<&Timestamp> {
        self.state.effective_at()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
