//! Repository trait for URL record data access.

use crate::domain::entities::{InsertOutcome, NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by exact match on its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by exact match on its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a new record with `visits = 0`.
    ///
    /// Unique violations on the short code or the original URL are reported
    /// through [`InsertOutcome`], not as errors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on any other database error.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError>;

    /// Atomically increments `visits` for the record with this short code.
    ///
    /// Returns the updated record, or `None` if no record has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn increment_visits(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Lists every record, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Deletes legacy records that have no short code. Returns the number removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete_missing_codes(&self) -> Result<u64, AppError>;

    /// Counts stored records.
    async fn count(&self) -> Result<i64, AppError>;

    /// Sums `visits` across all records.
    async fn total_visits(&self) -> Result<i64, AppError>;

    /// Round-trips to the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}
