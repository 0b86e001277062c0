//! Core domain entities.
//!
//! The service has a single entity, [`UrlRecord`], plus the input and outcome
//! types used when persisting a new one.

pub mod url_record;

pub use url_record::{InsertOutcome, NewUrlRecord, UrlRecord};
