//! API route configuration.
//!
//! Mutating endpoints require HTTP Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Routes mounted under `/url`.
///
/// # Endpoints
///
/// - `POST   /`         - Register a URL under a supplied or generated alias
/// - `DELETE /{alias}`  - Remove an alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(save_handler))
        .route("/{alias}", delete(delete_handler))
}
