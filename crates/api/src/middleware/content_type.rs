use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;

/// Reject `POST` and `PUT` requests whose `Content-Type` is not
/// `application/json` with 415.
pub async fn require_json(request: Request, next: Next) -> Result<Response, AppError> {
    let carries_body = matches!(*request.method(), Method::POST | Method::PUT);

    if carries_body && !is_json(request.headers()) {
        return Err(AppError::UnsupportedMediaType(
            "Content-Type must be application/json".into(),
        ));
    }

    Ok(next.run(request).await)
}

/// `application/json`, parameters (e.g. `; charset=utf-8`) allowed.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn plain_json_is_accepted() {
        assert!(is_json(&headers("application/json")));
    }

    #[test]
    fn json_with_charset_is_accepted() {
        assert!(is_json(&headers("Application/JSON; charset=utf-8")));
    }

    #[test]
    fn other_types_are_rejected() {
        assert!(!is_json(&headers("text/plain")));
        assert!(!is_json(&headers("application/jsonx")));
        assert!(!is_json(&HeaderMap::new()));
    }
}
