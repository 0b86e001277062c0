//! Administrative views and maintenance over stored records.

use std::sync::Arc;

use tracing::info;

use crate::application::services::redirect_service::URL_NOT_FOUND;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Aggregate counters shown by the admin CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_urls: i64,
    pub total_visits: i64,
}

/// Listing, summary and cleanup of URL records.
pub struct AdminService {
    repository: Arc<dyn UrlRepository>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns every record, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let records = self.repository.list_all().await?;
        info!(count = records.len(), "Fetched all URLs");
        Ok(records)
    }

    /// Looks up a single record without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has `short_code`.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn find_by_code(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(URL_NOT_FOUND))
    }

    /// Removes legacy records that have no short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn cleanup_missing_codes(&self) -> Result<u64, AppError> {
        let removed = self.repository.delete_missing_codes().await?;
        info!(removed, "Database cleanup completed");
        Ok(removed)
    }

    /// Returns total record and visit counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn summary(&self) -> Result<Summary, AppError> {
        let (total_urls, total_visits) =
            tokio::try_join!(self.repository.count(), self.repository.total_visits())?;

        Ok(Summary {
            total_urls,
            total_visits,
        })
    }

    /// Checks that the backing store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
