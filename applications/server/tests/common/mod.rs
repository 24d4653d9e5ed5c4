//! Common test utilities and fixtures
#![allow(dead_code)]

use chirpy_server::{services::credentials::MIN_COST, AppState, AuthService};
use chirpy_storage::JsonStore;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret-key-for-testing";
pub const TEST_POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

/// Create a store backed by a fresh file in a temp directory
///
/// Keep the returned `TempDir` alive for as long as the store is used.
pub fn create_test_store() -> (Arc<JsonStore>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::new(temp_dir.path().join("database.json"));
    (Arc::new(store), temp_dir)
}

/// Auth service with a 60-day refresh lifetime
pub fn create_test_auth_service() -> AuthService {
    AuthService::new(TEST_SECRET.to_string(), 60)
}

pub fn create_test_state(store: Arc<JsonStore>) -> AppState {
    AppState::new(
        store,
        Arc::new(create_test_auth_service()),
        MIN_COST,
        TEST_POLKA_KEY,
    )
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_EMAIL: &str = "a@x.com";
    pub const TEST_PASSWORD: &str = "secret";

    pub const OTHER_EMAIL: &str = "b@x.com";
    pub const OTHER_PASSWORD: &str = "hunter2";
}
