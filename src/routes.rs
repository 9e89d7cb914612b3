//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET     /`          - Landing page (`<static_dir>/index.html`)
//! - `POST    /shorten`   - Create a short code (form field `url`)
//! - `GET     /health`    - Storage health check
//! - `GET     /{code}`    - Redirect to the original URL
//! - `OPTIONS *`          - Always `200 OK`
//!
//! # Middleware
//!
//! - **CORS** - Any origin, `POST`/`GET`/`OPTIONS`, `Content-Type`
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::routing::{get, get_service, post};
use axum::{Router, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeFile;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding the landing page `index.html`
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}

/// Routes and middleware without path normalization.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let index = ServeFile::new(static_dir.as_ref().join("index.html"));

    Router::new()
        .route("/", get_service(index))
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(middleware::from_fn(cors::preflight))
        .layer(cors::layer())
        .layer(tracing::layer())
}
