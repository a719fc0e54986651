//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors, pagination)
//! - `document` - Versioned document aggregate and its lifecycle rules

pub mod document;
pub mod foundation;
