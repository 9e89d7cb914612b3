//! Handler for link shortening endpoint.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use serde_json::json;
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with a single `url` field:
///
/// ```text
/// url=https%3A%2F%2Fexample.com
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "aZ3_k9",
///   "short_url": "https://s.example.com/aZ3_k9"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` if `url` is missing or empty, or the body is not a form
/// - `500 Internal Server Error` if no code could be generated or stored
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Form(payload) = form.map_err(|rejection| {
        AppError::bad_request(
            "URL is required",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;
    let url = payload.url.unwrap_or_default();

    let code = state.url_store.put(&url).await.map_err(|e| {
        error!("Failed to shorten {}: {}", url, e);
        AppError::from(e)
    })?;

    info!("Created {} -> {}", code, url);

    Ok(Json(ShortenResponse {
        short_url: state.short_url(code.as_str()),
        code: code.into_inner(),
    }))
}
