//! Cross-origin request handling.

use axum::{
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer.
///
/// Any origin may call the service with `POST`, `GET` and `OPTIONS`, sending
/// a `Content-Type` header. Preflight requests (carrying `Origin` and
/// `Access-Control-Request-Method`) are answered by this layer directly.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
}

/// Answers every `OPTIONS` request that reaches the router with `200 OK`.
///
/// Routes only register their own methods, so without this an `OPTIONS`
/// that gets past the CORS layer would be answered with
/// `405 Method Not Allowed`.
pub async fn preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(req).await
}
