//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form body of `POST /shorten`.
///
/// The field is optional at the serde level so a missing `url` surfaces as a
/// validation error (400) rather than a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    /// The original URL to shorten. Stored verbatim.
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    #[serde(default)]
    pub url: Option<String>,
}

/// Response to a successful shorten request.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
}
