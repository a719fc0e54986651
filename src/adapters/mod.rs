//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL document store
//! - `memory` - In-memory document store for tests and embedding
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod memory;
pub mod postgres;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryDocumentStore;
pub use postgres::{PostgresDocumentReader, PostgresDocumentRepository};
