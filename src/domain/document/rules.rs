//! Lifecycle rules.
//!
//! Pure functions over [`VersionedDocument`] values. They never touch
//! storage or read the clock; the current instant is passed in. Inputs are
//! borrowed and never modified, every change comes back as a new value.

use super::aggregate::VersionedDocument;
use super::errors::{LockedAction, RuleViolation};
use super::state::{DocumentState, DocumentStatus};
use crate::domain::foundation::{StateMachine, Timestamp, Version};

/// Builds a fresh draft stamped with `now`.
pub fn new_draft(version: Version, content: impl Into<String>, now: Timestamp) -> VersionedDocument {
    VersionedDocument::build(version, content.into(), DocumentState::Draft, now, now)
}

pub fn is_active(doc: &VersionedDocument) -> bool {
    matches!(doc.state(), DocumentState::Active { .. })
}

/// Replaces the content of a draft.
///
/// # Errors
///
/// - `AlreadyActive` if the document is active
pub fn update_content(
    doc: &VersionedDocument,
    content: impl Into<String>,
    now: Timestamp,
) -> Result<VersionedDocument, RuleViolation> {
    ensure_mutable(doc, LockedAction::Update)?;

    Ok(VersionedDocument::build(
        doc.version(),
        content.into(),
        *doc.state(),
        *doc.created_at(),
        now,
    ))
}

/// Moves a draft to active as of `effective_at`.
///
/// `effective_at` is not compared with `now`; back-dated and future
/// activations are both accepted.
///
/// # Errors
///
/// - `AlreadyActive` if the document is already active
pub fn activate(
    doc: &VersionedDocument,
    effective_at: Timestamp,
    now: Timestamp,
) -> Result<VersionedDocument, RuleViolation> {
    doc.status()
        .transition_to(DocumentStatus::Active)
        .map_err(|_| RuleViolation::AlreadyActive {
            version: doc.version(),
            action: LockedAction::Activate,
        })?;

    Ok(VersionedDocument::build(
        doc.version(),
        doc.content().to_string(),
        DocumentState::Active { effective_at },
        *doc.created_at(),
        now,
    ))
}

/// Copies `doc`'s content into a new draft under `new_version`.
///
/// Always succeeds, whatever the source's state.
pub fn clone_as_draft(doc: &VersionedDocument, new_version: Version, now: Timestamp) -> VersionedDocument {
    new_draft(new_version, doc.content(), now)
}

/// Checks that a document may be deleted.
///
/// # Errors
///
/// - `AlreadyActive` if the document is active
pub fn ensure_deletable(doc: &VersionedDocument) -> Result<(), RuleViolation> {
    ensure_mutable(doc, LockedAction::Delete)
}

fn ensure_mutable(doc: &VersionedDocument, action: LockedAction) -> Result<(), RuleViolation> {
    if doc.status().is_mutable() {
        Ok(())
    } else {
        Err(RuleViolation::AlreadyActive {
            version: doc.version(),
            action,
        })
    }
}
