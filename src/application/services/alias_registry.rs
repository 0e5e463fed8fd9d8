//! Alias registry: the owner of the alias → URL mapping.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use crate::domain::entities::NewUrlRecord;
use crate::domain::repositories::{StoreError, UrlRepository};

/// Errors reported by [`AliasRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A record with this alias already exists.
    #[error("alias '{alias}' already exists")]
    AliasExists { alias: String },

    /// No record has this alias.
    #[error("alias '{alias}' not found")]
    AliasNotFound { alias: String },

    /// The backing store failed. Fatal to the request, not to the process.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl RegistryError {
    fn from_store(err: StoreError, alias: &str) -> Self {
        match err {
            StoreError::Exists => RegistryError::AliasExists {
                alias: alias.to_string(),
            },
            StoreError::NotFound => RegistryError::AliasNotFound {
                alias: alias.to_string(),
            },
            StoreError::Other(detail) => RegistryError::StorageUnavailable(detail),
        }
    }
}

/// Service owning alias records.
///
/// Holds no mutable state besides the repository handle; atomicity of
/// concurrent creates rests on the store's unique constraint on `alias`.
///
/// Alias generation is not part of the registry. Callers that accept an
/// empty alias compose [`crate::utils::alias_generator`] with [`Self::create`]
/// and decide themselves what to do on [`RegistryError::AliasExists`].
#[derive(Clone)]
pub struct AliasRegistry {
    repository: Arc<dyn UrlRepository>,
}

impl AliasRegistry {
    /// Ensures the backing schema exists and returns a ready registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageUnavailable`] if schema creation fails.
    pub async fn init(repository: Arc<dyn UrlRepository>) -> Result<Self, RegistryError> {
        repository.ensure_schema().await.map_err(|e| {
            error!(error = %e, "Failed to ensure storage schema");
            RegistryError::from_store(e, "")
        })?;

        Ok(Self { repository })
    }

    /// Stores `target_url` under `alias` and returns the new record id.
    ///
    /// Preconditions (checked by the caller): `target_url` and `alias` are
    /// non-empty.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AliasExists`] if the alias is taken
    /// - [`RegistryError::StorageUnavailable`] on other persistence failures
    pub async fn create(&self, target_url: &str, alias: &str) -> Result<i64, RegistryError> {
        let id = self
            .repository
            .insert(NewUrlRecord::new(alias, target_url))
            .await
            .map_err(|e| self.report(e, "create", alias))?;

        debug!(alias, id, "Alias created");
        Ok(id)
    }

    /// Returns the target URL stored under `alias`, unchanged.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AliasNotFound`] if no record has this alias
    /// - [`RegistryError::StorageUnavailable`] on other persistence failures
    pub async fn resolve(&self, alias: &str) -> Result<String, RegistryError> {
        let url = self
            .repository
            .find_url(alias)
            .await
            .map_err(|e| self.report(e, "resolve", alias))?;

        debug!(alias, "Alias resolved");
        Ok(url)
    }

    /// Removes the record stored under `alias`.
    ///
    /// Deleting a missing alias is reported, not treated as success.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AliasNotFound`] if there was nothing to delete
    /// - [`RegistryError::StorageUnavailable`] on other persistence failures
    pub async fn delete(&self, alias: &str) -> Result<(), RegistryError> {
        self.repository
            .delete(alias)
            .await
            .map_err(|e| self.report(e, "delete", alias))?;

        debug!(alias, "Alias deleted");
        Ok(())
    }

    /// Checks that the backing store answers.
    pub async fn ping(&self) -> Result<(), RegistryError> {
        self.repository
            .ping()
            .await
            .map_err(|e| self.report(e, "ping", ""))
    }

    fn report(&self, err: StoreError, op: &'static str, alias: &str) -> RegistryError {
        if let StoreError::Other(detail) = &err {
            error!(op, alias, error = %detail, "Storage failure");
        }
        RegistryError::from_store(err, alias)
    }
}
