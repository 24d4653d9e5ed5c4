/// Shared application state
use crate::services::{AccountService, AuthService, ChirpService};
use chirpy_storage::JsonStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub accounts: AccountService,
    pub chirps: ChirpService,
    pub polka_api_key: Arc<str>,
    hits: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(
        store: Arc<JsonStore>,
        auth_service: Arc<AuthService>,
        bcrypt_cost: u32,
        polka_api_key: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            accounts: AccountService::new(Arc::clone(&store), bcrypt_cost),
            chirps: ChirpService::new(store),
            auth_service,
            polka_api_key: polka_api_key.into(),
            hits: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Count one visit to the static site
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn reset_hits(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
