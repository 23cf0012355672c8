//! Handlers for requests no route accepts.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Any path without a route -- 404.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// A routed path hit with a method it does not serve -- 405.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
