//! # Alias Shortener
//!
//! Maps short aliases to long URLs and resolves them on lookup, built with
//! Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - the URL record and the storage boundary
//! - **Application Layer** ([`application`]) - the alias registry
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export HTTP_USER=admin HTTP_PASSWORD=secret
//! cargo run
//!
//! curl -u admin:secret -X POST http://localhost:8080/url \
//!      -H 'Content-Type: application/json' \
//!      -d '{"url": "https://example.com/a", "alias": "ex1"}'
//! curl -i http://localhost:8080/ex1
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasRegistry, RegistryError};
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::{StoreError, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::alias_generator::{AliasGenerator, generate_alias};
}
