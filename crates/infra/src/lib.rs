//! Read-only repository abstractions.

pub mod repository;

pub use repository::{InMemoryRepository, Repository};
