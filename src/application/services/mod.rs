//! Business logic services for the application layer.

pub mod admin_service;
pub mod redirect_service;
pub mod shorten_service;

pub use admin_service::{AdminService, Summary};
pub use redirect_service::RedirectService;
pub use shorten_service::ShortenService;
