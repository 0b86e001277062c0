//! URL record entity representing a short code to original URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and the original URL.
///
/// `visits` only ever grows, one per successful redirect. `created_at` is set
/// once when the record is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        visits: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            visits,
            created_at,
        }
    }
}

/// Input data for inserting a new record. Visits always start at zero.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

/// Result of an insert attempt.
///
/// Unique violations are expected outcomes rather than errors: the caller
/// retries with a new code on [`InsertOutcome::CodeTaken`] and re-reads the
/// existing record on [`InsertOutcome::UrlTaken`].
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    Created(UrlRecord),
    /// Another record already uses the candidate short code.
    CodeTaken,
    /// Another record already exists for this original URL.
    UrlTaken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "https://example.com".to_string(),
            "abc123".to_string(),
            0,
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.short_code, "abc123");
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.visits, 0);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_url_record_creation() {
        let new_record = NewUrlRecord {
            original_url: "https://rust-lang.org".to_string(),
            short_code: "xYz-_9".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(new_record.short_code.len(), 6);
        assert_eq!(new_record.original_url, "https://rust-lang.org");
    }
}
