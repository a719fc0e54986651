//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentReader` - Query side of the document store
//! - `DocumentRepository` - Command side of the document store
//! - `Clock` - Source of the current instant

mod clock;
mod document_reader;
mod document_repository;

pub use clock::Clock;
pub use document_reader::DocumentReader;
pub use document_repository::DocumentRepository;
