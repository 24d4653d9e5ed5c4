/// User domain type
use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// Stored user account
///
/// `password_hash` is a bcrypt string and never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store
    pub id: UserId,
    /// Unique across all users
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Set by the payment provider's upgrade webhook
    #[serde(default)]
    pub is_chirpy_red: bool,
}

impl User {
    /// Create a user that has not been upgraded
    pub fn new(id: UserId, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password_hash: password_hash.into(),
            is_chirpy_red: false,
        }
    }
}
