use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::INTERNAL_ERROR_MESSAGE;

/// Turn a panic caught by `CatchPanicLayer` into a 500 response.
///
/// The panic message is logged; the response body stays generic.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}
