//! Short code generation.
//!
//! Codes are drawn from a 64-symbol URL-safe alphabet using OS entropy.
//! Uniqueness is not guaranteed here; callers rely on the storage-level
//! unique index and retry on collision.

use crate::error::AppError;

/// Number of characters in every generated short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// URL-safe alphabet. Its size is exactly 64, so masking a random byte to
/// 6 bits selects every symbol with equal probability.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generates a random short code of [`SHORT_CODE_LENGTH`] characters.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 6);
/// assert!(is_well_formed_code(&code));
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; SHORT_CODE_LENGTH];

    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::internal(format!("Random source unavailable: {e}")))?;

    Ok(buffer
        .iter()
        .map(|byte| ALPHABET[usize::from(byte & 0x3f)] as char)
        .collect())
}

/// Returns true if `code` could have been produced by [`generate_code`].
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
