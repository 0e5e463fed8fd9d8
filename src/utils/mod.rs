//! Utility functions shared across layers.
//!
//! - [`alias_generator`] - random alias generation
//! - [`db_error`] - classification of SQLx driver errors

pub mod alias_generator;
pub mod db_error;
