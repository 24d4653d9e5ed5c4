/// Account service - registration, login and account updates
use crate::services::credentials;
use chirpy_core::{ChirpyError, Rejection, User, UserId};
use chirpy_storage::{users, JsonStore};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AccountService {
    store: Arc<JsonStore>,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(store: Arc<JsonStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Create an account; the email must not already be registered
    pub async fn register(&self, email: &str, password: &str) -> Result<User, ChirpyError> {
        let password_hash = self.hash(password).await?;
        let user = users::create(&self.store, email, &password_hash).await?;
        tracing::info!(user_id = %user.id, "Registered user");
        Ok(user)
    }

    /// Check an email/password pair
    ///
    /// A stored hash that cannot be parsed is logged and reported as bad
    /// credentials.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, ChirpyError> {
        let user = users::find_by_email(&self.store, email)
            .await?
            .ok_or(Rejection::NotFound)?;

        match self.verify(password, &user.password_hash).await {
            Ok(true) => Ok(user),
            Ok(false) => Err(Rejection::BadCredentials.into()),
            Err(e) => {
                tracing::error!(user_id = %user.id, "Stored password hash unusable: {}", e);
                Err(Rejection::BadCredentials.into())
            }
        }
    }

    /// Replace a user's email and password
    pub async fn update(
        &self,
        user_id: UserId,
        email: &str,
        password: &str,
    ) -> Result<User, ChirpyError> {
        let password_hash = self.hash(password).await?;
        let user = users::update_credentials(&self.store, user_id, email, &password_hash).await?;
        tracing::info!(user_id = %user.id, "Updated user credentials");
        Ok(user)
    }

    /// Mark a user as upgraded; repeating the upgrade is harmless
    pub async fn apply_upgrade(&self, user_id: UserId) -> Result<(), ChirpyError> {
        users::set_chirpy_red(&self.store, user_id).await?;
        tracing::info!(user_id = %user_id, "User upgraded to Chirpy Red");
        Ok(())
    }

    /// All users, ordered by identity
    pub async fn list(&self) -> Result<Vec<User>, ChirpyError> {
        Ok(users::get_all(&self.store).await?)
    }

    async fn hash(&self, password: &str) -> Result<String, ChirpyError> {
        let password = password.to_string();
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || credentials::hash_password(&password, cost))
            .await
            .map_err(|e| ChirpyError::Hashing(e.to_string()))?
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, ChirpyError> {
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || credentials::verify_password(&password, &hash))
            .await
            .map_err(|e| ChirpyError::Hashing(e.to_string()))?
    }
}
