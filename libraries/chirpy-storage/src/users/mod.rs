//! User management queries

use crate::{JsonStore, Result, StorageError};
use chirpy_core::{User, UserId};

/// Store a new user with an already-hashed password
///
/// Fails with `DuplicateEmail` if any stored user has the same email.
pub async fn create(store: &JsonStore, email: &str, password_hash: &str) -> Result<User> {
    store
        .write(|doc| {
            if doc.user_by_email(email).is_some() {
                return Err(StorageError::DuplicateEmail(email.to_string()));
            }
            Ok(doc.insert_user(email, password_hash))
        })
        .await
}

/// Get a user by identity
pub async fn get(store: &JsonStore, id: UserId) -> Result<User> {
    store
        .read(|doc| {
            doc.user(id)
                .cloned()
                .ok_or_else(|| StorageError::not_found("User", id))
        })
        .await
}

/// Look up a user by exact email
pub async fn find_by_email(store: &JsonStore, email: &str) -> Result<Option<User>> {
    store.read(|doc| Ok(doc.user_by_email(email).cloned())).await
}

/// Get all users, ordered by identity
pub async fn get_all(store: &JsonStore) -> Result<Vec<User>> {
    store.read(|doc| Ok(doc.users().cloned().collect())).await
}

/// Overwrite a user's email and password hash
pub async fn update_credentials(
    store: &JsonStore,
    id: UserId,
    email: &str,
    password_hash: &str,
) -> Result<User> {
    store
        .write(|doc| {
            if doc.user_by_email(email).is_some_and(|other| other.id != id) {
                return Err(StorageError::DuplicateEmail(email.to_string()));
            }
            let user = doc
                .user_mut(id)
                .ok_or_else(|| StorageError::not_found("User", id))?;
            user.email = email.to_string();
            user.password_hash = password_hash.to_string();
            Ok(user.clone())
        })
        .await
}

/// Mark a user as upgraded; already-upgraded users are left as they are
pub async fn set_chirpy_red(store: &JsonStore, id: UserId) -> Result<User> {
    store
        .write(|doc| {
            let user = doc
                .user_mut(id)
                .ok_or_else(|| StorageError::not_found("User", id))?;
            user.is_chirpy_red = true;
            Ok(user.clone())
        })
        .await
}
