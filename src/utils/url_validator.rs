//! Validation of user-submitted URLs.

use crate::error::AppError;
use url::Url;

pub const URL_REQUIRED: &str = "URL is required";
pub const INVALID_URL_FORMAT: &str = "Invalid URL format";

/// Validates a URL submitted for shortening.
///
/// Accepts any absolute URL the WHATWG-compatible parser understands, with
/// any scheme. The input is returned unchanged so that deduplication works
/// on the exact string the client sent.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with:
/// - `"URL is required"` if the input is missing or empty
/// - `"Invalid URL format"` if the input does not parse
pub fn validate_original_url(input: Option<&str>) -> Result<&str, AppError> {
    let candidate = match input {
        Some(s) if !s.is_empty() => s,
        _ => return Err(AppError::validation(URL_REQUIRED)),
    };

    Url::parse(candidate).map_err(|e| {
        tracing::debug!(url = candidate, error = %e, "Rejected URL");
        AppError::validation(INVALID_URL_FORMAT)
    })?;

    Ok(candidate)
}

/// Serializes a stored URL for use in a `Location` header.
///
/// Parsing percent-encodes non-ASCII paths and punycodes hosts. Values that
/// no longer parse are returned as stored.
pub fn to_location(original_url: &str) -> String {
    Url::parse(original_url)
        .map(String::from)
        .unwrap_or_else(|_| original_url.to_string())
}
