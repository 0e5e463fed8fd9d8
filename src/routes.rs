//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Alias redirect (public)
//! - `GET    /health`       - Storage health check (public)
//! - `POST   /url`          - Create alias (Basic auth)
//! - `DELETE /url/{alias}`  - Delete alias (Basic auth)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline
//! - **Authentication** - Basic auth on `/url`
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, request_id, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline after which a request is answered with
///   `408 Request Timeout`
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let url_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .nest("/url", url_router)
        .with_state(state)
        .layer(timeout_layer(request_timeout))
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

// Answers timed-out requests with 408.
#[allow(deprecated)]
fn timeout_layer(request_timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::new(request_timeout)
}
