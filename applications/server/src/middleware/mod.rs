/// Request middleware
pub mod auth;
pub mod hits;

pub use auth::{auth_middleware, authorization_header, AuthenticatedUser};
pub use hits::count_hits;
