//! The single serialized aggregate persisted by [`JsonStore`](crate::JsonStore)

use chirpy_core::{Chirp, ChirpId, User, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the store knows: both tables and their identity counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub(crate) chirps: ChirpTable,
    #[serde(default)]
    pub(crate) users: UserTable,
}

/// Chirps keyed by identity, plus the next identity to hand out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChirpTable {
    pub(crate) chirps: BTreeMap<ChirpId, Chirp>,
    pub(crate) next_id: ChirpId,
}

/// Users keyed by identity, plus the next identity to hand out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTable {
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) next_id: UserId,
}

impl Document {
    /// All chirps in ascending identity order
    pub fn chirps(&self) -> impl DoubleEndedIterator<Item = &Chirp> {
        self.chirps.chirps.values()
    }

    /// All users in ascending identity order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.users.values()
    }

    pub fn chirp(&self, id: ChirpId) -> Option<&Chirp> {
        self.chirps.chirps.get(&id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.users.get(&id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users().find(|u| u.email == email)
    }

    /// Identity the next created chirp will receive
    pub fn next_chirp_id(&self) -> ChirpId {
        self.chirps.next_id
    }

    /// Identity the next created user will receive
    pub fn next_user_id(&self) -> UserId {
        self.users.next_id
    }

    /// Assign the next chirp identity, store the chirp and advance the counter.
    pub(crate) fn insert_chirp(&mut self, body: &str, author_id: UserId) -> Chirp {
        let id = self.chirps.next_id;
        let chirp = Chirp::new(id, body, author_id);
        self.chirps.chirps.insert(id, chirp.clone());
        self.chirps.next_id = id.next();
        chirp
    }

    /// Counters are left untouched so a removed identity is never reissued.
    pub(crate) fn remove_chirp(&mut self, id: ChirpId) -> Option<Chirp> {
        self.chirps.chirps.remove(&id)
    }

    /// Assign the next user identity, store the user and advance the counter.
    pub(crate) fn insert_user(&mut self, email: &str, password_hash: &str) -> User {
        let id = self.users.next_id;
        let user = User::new(id, email, password_hash);
        self.users.users.insert(id, user.clone());
        self.users.next_id = id.next();
        user
    }

    pub(crate) fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.users.get_mut(&id)
    }
}
