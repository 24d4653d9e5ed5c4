//! Domain types for Chirpy

mod chirp;
mod ids;
mod query;
mod user;

pub use chirp::Chirp;
pub use ids::{ChirpId, UserId};
pub use query::{AuthorFilter, SortOrder};
pub use user::User;
