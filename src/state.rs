//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::AliasRegistry;
use crate::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<AliasRegistry>,
    pub alias_generator: Arc<dyn AliasGenerator>,
    pub credentials: Arc<BasicCredentials>,
}

/// Credentials accepted by the Basic auth middleware on `/url` routes.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl AppState {
    /// Creates state with the production random alias generator.
    pub fn new(registry: Arc<AliasRegistry>, credentials: BasicCredentials) -> Self {
        Self {
            registry,
            alias_generator: Arc::new(RandomAliasGenerator),
            credentials: Arc::new(credentials),
        }
    }

    /// Replaces the alias generator.
    pub fn with_alias_generator(mut self, generator: Arc<dyn AliasGenerator>) -> Self {
        self.alias_generator = generator;
        self
    }
}
