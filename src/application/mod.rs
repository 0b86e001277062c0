//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::UrlRepository`] trait
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short code creation with deduplication
//! - [`services::redirect_service::RedirectService`] - Code resolution and visit counting
//! - [`services::admin_service::AdminService`] - Listing, summary and legacy cleanup

pub mod services;
