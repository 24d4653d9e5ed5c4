/// Chirp domain type
use super::ids::{ChirpId, UserId};
use serde::{Deserialize, Serialize};

/// A short text post owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    /// Assigned by the store, never reused
    pub id: ChirpId,
    /// Text after length checks and masking
    pub body: String,
    /// Writer of the chirp; not checked against the user table
    pub author_id: UserId,
}

impl Chirp {
    /// Build a chirp from its parts
    pub fn new(id: ChirpId, body: impl Into<String>, author_id: UserId) -> Self {
        Self {
            id,
            body: body.into(),
            author_id,
        }
    }
}
