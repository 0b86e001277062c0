//! Infrastructure layer for external integrations.
//!
//! Provides concrete implementations of the domain repository traits.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
