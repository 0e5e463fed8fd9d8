//! Handler for alias creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

/// Registers a target URL under a supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a", "alias": "ex1" }
/// ```
///
/// When `alias` is absent or empty, a random 6-character alias is generated.
/// A generated alias that collides is reported as a conflict like any other;
/// generation is not retried.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 1, "alias": "ex1" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body cannot be decoded or the URL is invalid
/// - 409 Conflict if the alias is already taken
/// - 500 Internal Server Error on storage failure
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Failed to decode request",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let alias = match payload.alias {
        Some(alias) if !alias.is_empty() => alias,
        _ => state.alias_generator.generate(DEFAULT_ALIAS_LENGTH),
    };

    let id = state.registry.create(&payload.url, &alias).await?;

    info!(id, alias = %alias, "URL added");

    Ok((StatusCode::CREATED, Json(SaveResponse { id, alias })))
}
