//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL record storage, lookup and visit counting

pub mod pg_url_repository;

pub use pg_url_repository::PgUrlRepository;
