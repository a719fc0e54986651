//! Policy Ledger - versioned policy documents with a draft/active lifecycle.
//!
//! Documents are identified by a monotonically increasing version. Drafts
//! can be edited, deleted and activated; activation is one-way and active
//! documents are permanent. Any version can be cloned into a fresh draft.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;
pub mod telemetry;
