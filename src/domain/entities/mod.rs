//! Core domain entities.
//!
//! The service persists a single entity, [`UrlRecord`], mapping a short alias
//! to its target URL. [`NewUrlRecord`] carries the fields supplied at creation
//! time; the `id` is assigned by the store.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
