//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the camelCase JSON contract consumed by the client.

pub mod health;
pub mod shorten;
pub mod url_record;
