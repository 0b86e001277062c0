//! Origin (scheme and host) of an incoming request.
//!
//! Short URLs are built from the origin the client used to reach the
//! service, so the same deployment works behind any hostname.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Returns `scheme://host[:port]` for the request.
///
/// The host comes from the `Host` header, falling back to the URI authority
/// (present on HTTP/2 requests). The scheme is `http` unless `behind_proxy`
/// is set, in which case the first `X-Forwarded-Proto` value is used.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no host can be determined or the
/// `Host` header is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let origin = request_origin(&headers, &Uri::from_static("/api/shorten"), false).unwrap();
/// assert_eq!(origin, "http://sho.rt:8080");
/// ```
pub fn request_origin(
    headers: &HeaderMap,
    uri: &Uri,
    behind_proxy: bool,
) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::validation("Invalid Host header"))?
            .to_string(),
        None => uri
            .authority()
            .map(|a| a.as_str().to_string())
            .ok_or_else(|| AppError::validation("Missing Host header"))?,
    };

    let scheme = if behind_proxy {
        forwarded_proto(headers).unwrap_or("http")
    } else {
        "http"
    };

    Ok(format!("{scheme}://{host}"))
}

fn forwarded_proto(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(FORWARDED_PROTO)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|proto| {
            proto.eq_ignore_ascii_case("http") || proto.eq_ignore_ascii_case("https")
        })
}
