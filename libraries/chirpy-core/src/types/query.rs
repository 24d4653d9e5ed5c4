/// Query parameters for listing chirps
use super::chirp::Chirp;
use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// Which authors to include when listing chirps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorFilter {
    /// Every chirp in the store
    #[default]
    All,
    /// Only chirps written by this user
    Author(UserId),
}

impl AuthorFilter {
    /// Whether `chirp` passes this filter
    pub fn matches(&self, chirp: &Chirp) -> bool {
        match self {
            AuthorFilter::All => true,
            AuthorFilter::Author(id) => chirp.author_id == *id,
        }
    }
}

impl From<Option<UserId>> for AuthorFilter {
    fn from(author: Option<UserId>) -> Self {
        author.map_or(AuthorFilter::All, AuthorFilter::Author)
    }
}

/// Ordering of listed chirps by identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    #[default]
    Asc,
    /// Newest first
    Desc,
}
