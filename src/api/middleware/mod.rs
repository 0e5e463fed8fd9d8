//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, request-id injection, and observability middleware.

pub mod auth;
pub mod request_id;
pub mod tracing;
