//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::alias_registry::AliasRegistry`] - alias create / resolve / delete

pub mod services;
