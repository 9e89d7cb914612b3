//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header, header::InvalidHeaderValue},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::domain::entities::ShortCode;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject path segments that cannot be a short code
/// 2. Look the code up in the store
/// 3. Return 301 Moved Permanently with `Location` set to the stored URL
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or unknown, including path
/// segments that do not decode to UTF-8. Storage failures during lookup are
/// also reported as 404.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(code) = path.map_err(|rejection| {
        debug!("Rejected lookup path: {}", rejection.body_text());
        AppError::not_found("URL not found", json!({}))
    })?;

    let code = ShortCode::parse(&code).map_err(|e| {
        debug!("Rejected lookup: {}", e);
        AppError::from(e)
    })?;

    let Some(long_url) = state.url_store.get(code.as_str()).await else {
        debug!("No mapping for {}", code);
        return Err(AppError::not_found(
            "URL not found",
            json!({ "code": code.as_str() }),
        ));
    };

    let location = location_header(&long_url).map_err(|_| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "code": code.as_str() }),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value from a stored URL.
///
/// ASCII control characters are percent-encoded so the value always forms a
/// valid header. Everything else is passed through unchanged.
fn location_header(url: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    if !url.bytes().any(|b| b.is_ascii_control()) {
        return HeaderValue::from_str(url);
    }

    let mut encoded = String::with_capacity(url.len() + 8);
    for ch in url.chars() {
        if ch.is_ascii_control() {
            encoded.push_str(&format!("%{:02X}", ch as u32));
        } else {
            encoded.push(ch);
        }
    }

    HeaderValue::from_str(&encoded)
}
