//! URL shortening service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::{InsertOutcome, NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_original_url;

/// Maximum number of insert attempts when generated codes collide.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Creates short codes for URLs, reusing the existing code when a URL has
/// already been shortened.
pub struct ShortenService {
    repository: Arc<dyn UrlRepository>,
}

impl ShortenService {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns the record for `original_url`, creating it if needed.
    ///
    /// # Deduplication
    ///
    /// An existing record with the exact same URL is returned without any
    /// write. If a concurrent request inserts the same URL first, the insert
    /// here hits the unique index and the winner's record is returned.
    ///
    /// # Code Generation
    ///
    /// A fresh random code is tried up to [`MAX_CODE_ATTEMPTS`] times; each
    /// collision on the short code index triggers a new code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or malformed
    /// (no storage access happens in that case).
    /// Returns [`AppError::Internal`] if every attempt collided.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn shorten(&self, original_url: Option<&str>) -> Result<UrlRecord, AppError> {
        let original_url = validate_original_url(original_url)?;

        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            info!(
                short_code = %existing.short_code,
                "URL already exists, returning existing short code"
            );
            return Ok(existing);
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let short_code = generate_code()?;
            debug!(%short_code, attempt, "Generated short code");

            let new_record = NewUrlRecord {
                original_url: original_url.to_string(),
                short_code,
                created_at: Utc::now(),
            };

            match self.repository.insert(new_record).await? {
                InsertOutcome::Created(record) => {
                    info!(short_code = %record.short_code, "URL saved");
                    return Ok(record);
                }
                InsertOutcome::CodeTaken => {
                    warn!(attempt, "Short code collision, regenerating");
                }
                InsertOutcome::UrlTaken => {
                    debug!("URL inserted concurrently, returning stored record");
                    return self
                        .repository
                        .find_by_original_url(original_url)
                        .await?
                        .ok_or_else(|| {
                            AppError::internal("URL reported as taken but could not be read back")
                        });
                }
            }
        }

        Err(AppError::internal(format!(
            "Failed to generate a unique short code after {MAX_CODE_ATTEMPTS} attempts"
        )))
    }

    /// Builds the fully-qualified short URL from a request origin and code.
    pub fn short_url(origin: &str, short_code: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), short_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::utils::code_generator::{SHORT_CODE_LENGTH, is_well_formed_code};

    fn create_test_record(id: i64, url: &str, code: &str) -> UrlRecord {
        UrlRecord::new(id, url.to_string(), code.to_string(), 0, Utc::now())
    }

    fn created_from(new_record: &NewUrlRecord) -> InsertOutcome {
        InsertOutcome::Created(UrlRecord::new(
            10,
            new_record.original_url.clone(),
            new_record.short_code.clone(),
            0,
            new_record.created_at,
        ))
    }

    #[tokio::test]
    async fn test_shorten_creates_new_record() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_original_url()
            .withf(|url| url == "https://example.com/very/long/path")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .withf(|new_record| {
                new_record.original_url == "https://example.com/very/long/path"
                    && new_record.short_code.len() == SHORT_CODE_LENGTH
            })
            .times(1)
            .returning(|new_record| Ok(created_from(&new_record)));

        let service = ShortenService::new(Arc::new(mock_repo));

        let record = service
            .shorten(Some("https://example.com/very/long/path"))
            .await
            .unwrap();

        assert_eq!(record.visits, 0);
        assert!(is_well_formed_code(&record.short_code));
    }

    #[tokio::test]
    async fn test_shorten_returns_existing_without_writing() {
        let mut mock_repo = MockUrlRepository::new();

        let existing = create_test_record(5, "https://example.com", "exist1");
        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_repo.expect_insert().times(0);

        let service = ShortenService::new(Arc::new(mock_repo));

        let record = service.shorten(Some("https://example.com")).await.unwrap();

        assert_eq!(record.id, 5);
        assert_eq!(record.short_code, "exist1");
    }

    #[tokio::test]
    async fn test_shorten_missing_url_touches_nothing() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_find_by_original_url().times(0);
        mock_repo.expect_insert().times(0);

        let service = ShortenService::new(Arc::new(mock_repo));

        let err = service.shorten(None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "URL is required"));

        let err = service.shorten(Some("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "URL is required"));
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_touches_nothing() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_find_by_original_url().times(0);
        mock_repo.expect_insert().times(0);

        let service = ShortenService::new(Arc::new(mock_repo));

        let err = service.shorten(Some("not a url")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Invalid URL format"));
    }

    #[tokio::test]
    async fn test_shorten_retries_on_code_collision() {
        let mut mock_repo = MockUrlRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(InsertOutcome::CodeTaken));

        mock_repo
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_record| Ok(created_from(&new_record)));

        let service = ShortenService::new(Arc::new(mock_repo));

        let record = service.shorten(Some("https://example.com/a")).await.unwrap();
        assert_eq!(record.original_url, "https://example.com/a");
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_max_attempts() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .times(MAX_CODE_ATTEMPTS)
            .returning(|_| Ok(InsertOutcome::CodeTaken));

        let service = ShortenService::new(Arc::new(mock_repo));

        let err = service
            .shorten(Some("https://example.com/b"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_shorten_returns_race_winner() {
        let mut mock_repo = MockUrlRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(InsertOutcome::UrlTaken));

        let winner = create_test_record(7, "https://example.com/c", "winner");
        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(winner.clone())));

        let service = ShortenService::new(Arc::new(mock_repo));

        let record = service.shorten(Some("https://example.com/c")).await.unwrap();
        assert_eq!(record.short_code, "winner");
    }

    #[tokio::test]
    async fn test_shorten_propagates_storage_error() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Err(AppError::Storage(sqlx::Error::PoolTimedOut)));

        let service = ShortenService::new(Arc::new(mock_repo));

        let err = service
            .shorten(Some("https://example.com/d"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            ShortenService::short_url("http://sho.rt", "abc123"),
            "http://sho.rt/abc123"
        );
        assert_eq!(
            ShortenService::short_url("http://sho.rt/", "abc123"),
            "http://sho.rt/abc123"
        );
    }
}
