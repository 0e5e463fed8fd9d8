//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - alias → URL record storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_repository;

pub use url_repository::{StoreError, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
