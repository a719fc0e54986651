//! Draft/active state of a versioned document.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, Timestamp};

/// Where a document sits in its lifecycle.
///
/// An active document always carries the instant it took effect, so
/// "active without an effective date" cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentState {
    /// Still editable and deletable.
    Draft,
    /// Permanent; content and state are frozen.
    Active {
        #[serde(rename = "effectiveAt")]
        effective_at: Timestamp,
    },
}

impl DocumentState {
    pub fn status(&self) -> DocumentStatus {
        match self {
            DocumentState::Draft => DocumentStatus::Draft,
            DocumentState::Active { .. } => DocumentStatus::Active,
        }
    }

    /// The effective instant, `None` for drafts.
    pub fn effective_at(&self) -> Option<&Timestamp> {
        match self {
            DocumentState::Draft => None,
            DocumentState::Active { effective_at } => Some(effective_at),
        }
    }

    /// Builds the state from the nullable column stored by adapters.
    pub fn from_effective_at(effective_at: Option<Timestamp>) -> Self {
        match effective_at {
            Some(effective_at) => DocumentState::Active { effective_at },
            None => DocumentState::Draft,
        }
    }
}

/// Data-free status used for transition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    Active,
}

impl DocumentStatus {
    /// Only drafts accept content edits and deletion.
    pub fn is_mutable(&self) -> bool {
        matches!(self, DocumentStatus::Draft)
    }
}

impl StateMachine for DocumentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (DocumentStatus::Draft, DocumentStatus::Active))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            DocumentStatus::Draft => vec![DocumentStatus::Active],
            DocumentStatus::Active => vec![],
        }
    }
}
