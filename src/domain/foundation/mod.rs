//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, pagination, the state machine trait and the
//! error types that form the vocabulary of the policy ledger.

mod errors;
mod pagination;
mod state_machine;
mod timestamp;
mod version;

pub use errors::{DomainError, ErrorCode};
pub use pagination::{Page, PageInfo, PageRequest};
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::Timestamp;
pub use version::Version;
