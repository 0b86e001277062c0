//! Classification of database errors.

/// Unique index on `urls.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

/// Unique index on `md5(urls.original_url)`.
pub const ORIGINAL_URL_CONSTRAINT: &str = "urls_original_url_key";

/// Which unique constraint an insert violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueViolation {
    ShortCode,
    OriginalUrl,
}

/// Returns the violated constraint if `e` is a unique violation on one of
/// the `urls` indexes.
pub fn unique_violation(e: &sqlx::Error) -> Option<UniqueViolation> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some(SHORT_CODE_CONSTRAINT) => Some(UniqueViolation::ShortCode),
        Some(ORIGINAL_URL_CONSTRAINT) => Some(UniqueViolation::OriginalUrl),
        _ => None,
    }
}
