/// Server services
pub mod accounts;
pub mod auth;
pub mod chirps;
pub mod credentials;

pub use accounts::AccountService;
pub use auth::AuthService;
pub use chirps::ChirpService;
