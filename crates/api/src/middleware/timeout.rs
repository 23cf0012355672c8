use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Give the bare 408 produced by `TimeoutLayer` the standard error body.
pub async fn render_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        tracing::warn!("Request exceeded the server deadline");
        return AppError::Timeout.into_response();
    }
    response
}
