//! DTOs for the alias creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a target URL.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The URL to shorten.
    #[validate(url(message = "field url is not a valid URL"))]
    pub url: String,

    /// Optional alias. Absent or empty means "generate one".
    #[serde(default)]
    pub alias: Option<String>,
}

/// Response for a created alias.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub id: i64,
    pub alias: String,
}
