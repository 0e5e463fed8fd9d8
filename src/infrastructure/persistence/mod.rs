//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters for every query.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - alias → URL record storage

pub mod sqlite_url_repository;

pub use sqlite_url_repository::{SqliteUrlRepository, connect_pool};
