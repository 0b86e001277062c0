//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AdminService, RedirectService, ShortenService};
use crate::domain::repositories::UrlRepository;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
    pub admin_service: Arc<AdminService>,
    /// Trust `X-Forwarded-Proto` when building short URLs.
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires every service to the same repository.
    pub fn new(repository: Arc<dyn UrlRepository>, behind_proxy: bool) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(repository.clone())),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            admin_service: Arc::new(AdminService::new(repository)),
            behind_proxy,
        }
    }
}
