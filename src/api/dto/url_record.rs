//! DTO for records returned by the admin listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// A stored record as exposed over the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecordResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_code: record.short_code,
            visits: record.visits,
            created_at: record.created_at,
        }
    }
}
