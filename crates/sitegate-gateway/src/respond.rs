// Response helpers shared by the read routes.

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};

/// Attach headers that stop intermediaries from caching dynamic content.
pub fn no_store<R: IntoResponse>(inner: R) -> Response {
    let mut response = inner.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use serde_json::json;

    #[test]
    fn no_store_sets_all_three_headers() {
        let response = no_store(Json(json!({"ok": true})));
        let headers = response.headers();
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(headers.get(header::PRAGMA).unwrap(), "no-cache");
        assert_eq!(headers.get(header::EXPIRES).unwrap(), "0");
    }
}
