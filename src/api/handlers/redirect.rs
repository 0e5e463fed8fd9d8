//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Returns `307 Temporary Redirect` with the stored URL in `Location`,
/// byte-for-byte as it was registered.
///
/// # Errors
///
/// - 404 Not Found if the alias doesn't exist
/// - 500 Internal Server Error if the stored URL cannot be sent as a header
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state.registry.resolve(&alias).await?;

    let location = HeaderValue::from_str(&target_url).map_err(|_| {
        warn!(alias = %alias, "Stored URL is not a valid header value");
        AppError::internal("Stored URL cannot be redirected to", json!({ "alias": &alias }))
    })?;

    info!(alias = %alias, "Redirecting");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
