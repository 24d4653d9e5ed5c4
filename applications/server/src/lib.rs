//! Chirpy Server Library
//!
//! Short-post service with password login, JWT access/refresh tokens and a
//! single-file JSON record store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{AccountService, AuthService, ChirpService};
pub use state::AppState;
