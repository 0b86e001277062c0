//! Short code resolution with visit counting.

use std::sync::Arc;

use tracing::debug;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed_code;

pub const URL_NOT_FOUND: &str = "URL not found";

/// Resolves short codes to their original URLs.
pub struct RedirectService {
    repository: Arc<dyn UrlRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Counts a visit and returns the original URL for `short_code`.
    ///
    /// The lookup and the increment are one atomic storage operation, so
    /// concurrent visits to the same code are all counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        if !is_well_formed_code(short_code) {
            debug!(short_code, "Malformed short code");
            return Err(AppError::not_found(URL_NOT_FOUND));
        }

        let record = self
            .repository
            .increment_visits(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(URL_NOT_FOUND))?;

        debug!(short_code, visits = record.visits, "Visit recorded");

        Ok(record.original_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlRecord;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_resolve_known_code() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_increment_visits()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| {
                Ok(Some(UrlRecord::new(
                    1,
                    "https://example.com/target".to_string(),
                    code.to_string(),
                    1,
                    Utc::now(),
                )))
            });

        let service = RedirectService::new(Arc::new(mock_repo));

        let url = service.resolve("abc123").await.unwrap();
        assert_eq!(url, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_increment_visits()
            .times(1)
            .returning(|_| Ok(None));

        let service = RedirectService::new(Arc::new(mock_repo));

        let err = service.resolve("zzzzzz").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == URL_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_resolve_malformed_code_skips_storage() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_increment_visits().times(0);

        let service = RedirectService::new(Arc::new(mock_repo));

        for code in ["favicon.ico", "abc", "toolongcode", "ab$123"] {
            let err = service.resolve(code).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn test_resolve_storage_error() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_increment_visits()
            .times(1)
            .returning(|_| Err(AppError::Storage(sqlx::Error::PoolClosed)));

        let service = RedirectService::new(Arc::new(mock_repo));

        let err = service.resolve("abc123").await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
