//! Domain layer containing the URL record model and the storage boundary.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. It defines:
//!
//! - [`entities`] - the persisted [`entities::UrlRecord`]
//! - [`repositories`] - the [`repositories::UrlRepository`] trait and its
//!   closed [`repositories::StoreError`] taxonomy
//!
//! Concrete storage lives in [`crate::infrastructure::persistence`]; the
//! create/resolve/delete contract is enforced by
//! [`crate::application::services::AliasRegistry`].

pub mod entities;
pub mod repositories;
