//! Caller identity from the `X-User-Address` header.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use crate::error::ApiError;

/// Header carrying the caller's wallet address.
pub const CALLER_HEADER: &str = "x-user-address";

/// The caller's wallet address, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub String);

/// Read the caller from request headers. Blank or non-UTF-8 values count as absent.
#[must_use]
pub fn caller_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CALLER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        caller_from_headers(&parts.headers)
            .map(Self)
            .ok_or(ApiError::MissingCaller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_and_trims_header() {
        let mut headers = HeaderMap::new();
        headers.insert(CALLER_HEADER, HeaderValue::from_static("  0xB "));
        assert_eq!(caller_from_headers(&headers).as_deref(), Some("0xB"));
    }

    #[test]
    fn blank_header_is_absent() {
        let mut headers = HeaderMap::new();
        assert_eq!(caller_from_headers(&headers), None);
        headers.insert(CALLER_HEADER, HeaderValue::from_static("   "));
        assert_eq!(caller_from_headers(&headers), None);
    }
}
