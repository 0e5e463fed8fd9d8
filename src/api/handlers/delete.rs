//! Handler for alias removal.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Removes an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// Returns `204 No Content` once the record is gone.
///
/// # Errors
///
/// Returns 404 Not Found if there was nothing to delete, including a second
/// delete of the same alias.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.registry.delete(&alias).await?;

    info!(alias = %alias, "URL deleted");

    Ok(StatusCode::NO_CONTENT)
}
