#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use url_shortener::domain::entities::{InsertOutcome, NewUrlRecord, UrlRecord};
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::error::AppError;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;

pub const TEST_HOST: &str = "sho.rt";

/// In-memory repository enforcing the same uniqueness rules as the `urls` table.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<Vec<UrlRecord>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record directly, bypassing the shortening workflow.
    pub fn seed(&self, original_url: &str, short_code: &str, created_at: DateTime<Utc>) {
        let mut records = self.records.lock().unwrap();
        let id = records.len() as i64 + 1;
        records.push(UrlRecord::new(
            id,
            original_url.to_string(),
            short_code.to_string(),
            0,
            created_at,
        ));
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn visits(&self, short_code: &str) -> Option<i64> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_code == short_code)
            .map(|r| r.visits)
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| r.original_url == original_url)
            .cloned())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.short_code == short_code).cloned())
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError> {
        let mut records = self.records.lock().unwrap();

        if records.iter().any(|r| r.short_code == new_record.short_code) {
            return Ok(InsertOutcome::CodeTaken);
        }
        if records
            .iter()
            .any(|r| r.original_url == new_record.original_url)
        {
            return Ok(InsertOutcome::UrlTaken);
        }

        let record = UrlRecord::new(
            records.len() as i64 + 1,
            new_record.original_url,
            new_record.short_code,
            0,
            new_record.created_at,
        );
        records.push(record.clone());
        Ok(InsertOutcome::Created(record))
    }

    async fn increment_visits(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let mut records = self.records.lock().unwrap();
        Ok(records
            .iter_mut()
            .find(|r| r.short_code == short_code)
            .map(|r| {
                r.visits += 1;
                r.clone()
            }))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    async fn delete_missing_codes(&self) -> Result<u64, AppError> {
        Ok(0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.lock().unwrap().len() as i64)
    }

    async fn total_visits(&self) -> Result<i64, AppError> {
        Ok(self.records.lock().unwrap().iter().map(|r| r.visits).sum())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Repository whose every call fails as if the database were down.
pub struct UnavailableUrlRepository;

fn unavailable() -> AppError {
    AppError::Storage(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl UrlRepository for UnavailableUrlRepository {
    async fn find_by_original_url(&self, _: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn insert(&self, _: NewUrlRecord) -> Result<InsertOutcome, AppError> {
        Err(unavailable())
    }

    async fn increment_visits(&self, _: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn delete_missing_codes(&self) -> Result<u64, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn total_visits(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn create_test_app(repository: Arc<dyn UrlRepository>) -> Router {
    let state = AppState::new(repository, false);
    app_router(state, &static_dir())
}

pub fn create_test_server(repository: Arc<dyn UrlRepository>) -> TestServer {
    TestServer::new(create_test_app(repository)).unwrap()
}

/// Server backed by a fresh in-memory repository, returned for inspection.
pub fn in_memory_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let server = create_test_server(repository.clone());
    (server, repository)
}
