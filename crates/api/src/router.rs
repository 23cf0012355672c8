//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same middleware
//! stack.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::fallback;
use crate::middleware::{content_type, panic, timeout};
use crate::routes;
use crate::state::AppState;

/// The routed application wrapped in path normalization.
pub type App = NormalizePath<Router>;

/// Build the full application with all middleware layers.
///
/// Requests pass through, outermost first:
///
/// 1. Trailing-slash trimming (before routing, so `/categories/` matches)
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Panic recovery (catch panics, return 500)
/// 6. Request timeout (408 rendered as JSON)
/// 7. JSON content-type enforcement
///
/// Unmatched paths and methods fall back to JSON 404 / 405 responses.
pub fn build_app_router(state: AppState) -> App {
    with_middleware(routes::app_routes(), state)
}

/// Wrap an arbitrary route tree in the production fallbacks and middleware
/// stack.
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> App {
    let deadline = Duration::from_secs(state.config.request_timeout_secs);

    let router = routes
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        // -- Middleware stack (applied bottom-up) --
        .layer(axum::middleware::from_fn(content_type::require_json))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            deadline,
        ))
        .layer(axum::middleware::map_response(timeout::render_timeout))
        .layer(CatchPanicLayer::custom(panic::handle_panic))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
