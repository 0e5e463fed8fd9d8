//! Request id injection and propagation.
//!
//! Every request gets an `x-request-id` (a UUID unless the client sent one),
//! which is recorded on the tracing span and echoed on the response.

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Assigns an `x-request-id` to requests that lack one.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}
