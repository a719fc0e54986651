//! Clock port.
//!
//! The application layer asks the clock for "now" and hands the instant to
//! the lifecycle rules, so tests can pin time.

use crate::domain::foundation::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
