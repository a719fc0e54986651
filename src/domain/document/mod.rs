//! Versioned document domain module.
//!
//! A single append-only document with a one-way draft/active lifecycle.
//! Drafts are created, edited, cloned and deleted; activation freezes a
//! version permanently.

mod aggregate;
mod errors;
pub mod rules;
mod state;

pub use aggregate::VersionedDocument;
pub use errors::{DocumentError, LockedAction, RuleViolation};
pub use state::{DocumentState, DocumentStatus};
