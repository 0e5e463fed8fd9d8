//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Builds a request span carrying method, URI, and the request id.
///
/// Must run inside [`super::request_id::set_layer`] so the id is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdSpan;

impl<B> MakeSpan<B> for RequestIdSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:** opens an `INFO` span with method, URI, and request id.
///
/// **On Response:** logs at `INFO` with status code and latency in
/// milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/url request_id=6f1c...}: finished processing request latency=3 ms status=201
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestIdSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestIdSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
