//! Permissive CORS for the browser-facing API.
//!
//! Every API response carries the wildcard origin plus the allowed method
//! and header lists, and preflights get an empty 204.

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Allowed methods advertised on every response.
const ALLOW_METHODS: &str = "GET, OPTIONS";

/// Allowed request headers advertised on every response.
const ALLOW_HEADERS: &str = "Content-Type";

/// Header triple attached to every API response.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
    ]
}

/// CORS preflight: no body, permissive headers.
pub async fn preflight() -> Response {
    (StatusCode::NO_CONTENT, cors_headers()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_triple() {
        let headers = cors_headers();
        assert_eq!(headers[0].1, "*");
        assert_eq!(headers[1].1, "GET, OPTIONS");
        assert_eq!(headers[2].1, "Content-Type");
    }
}
