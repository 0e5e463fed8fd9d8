//! Storage boundary for URL records.

use crate::domain::entities::NewUrlRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Outcome of a failed storage call.
///
/// Closed set of variants so callers match on kinds instead of comparing
/// driver error values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The unique constraint on `alias` rejected the write.
    #[error("record already exists")]
    Exists,

    /// No record matched the alias.
    #[error("record not found")]
    NotFound,

    /// Any other persistence failure (I/O, connection, schema).
    #[error("storage failure: {0}")]
    Other(String),
}

/// Repository interface for alias → URL records.
///
/// Every method is a single bounded round trip to the backing store.
/// Implementations must enforce alias uniqueness atomically inside the store
/// (a unique constraint), never with a read-then-write sequence.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates the record table and the alias index if they are absent.
    ///
    /// Idempotent; safe to run on every process start.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Inserts a record and returns its newly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Exists`] if the alias is already taken.
    async fn insert(&self, record: NewUrlRecord) -> Result<i64, StoreError>;

    /// Looks up the target URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this alias.
    async fn find_url(&self, alias: &str) -> Result<String, StoreError>;

    /// Removes the record stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if there was nothing to delete.
    async fn delete(&self, alias: &str) -> Result<(), StoreError>;

    /// Performs a trivial round trip to check the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
