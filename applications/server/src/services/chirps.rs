/// Chirp service - posting, listing and deleting chirps
use chirpy_core::{AuthorFilter, Chirp, ChirpId, ChirpyError, SortOrder, UserId};
use chirpy_storage::{chirps, JsonStore};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ChirpService {
    store: Arc<JsonStore>,
}

impl ChirpService {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Store a chirp for an already-authenticated author
    pub async fn create(&self, author_id: UserId, body: &str) -> Result<Chirp, ChirpyError> {
        Ok(chirps::create(&self.store, body, author_id).await?)
    }

    pub async fn list(
        &self,
        filter: AuthorFilter,
        order: SortOrder,
    ) -> Result<Vec<Chirp>, ChirpyError> {
        Ok(chirps::list(&self.store, filter, order).await?)
    }

    pub async fn get(&self, id: ChirpId) -> Result<Chirp, ChirpyError> {
        Ok(chirps::get(&self.store, id).await?)
    }

    /// Delete a chirp written by `requester`
    ///
    /// `NotFound` if no such chirp, `Forbidden` if someone else wrote it.
    pub async fn delete(&self, id: ChirpId, requester: UserId) -> Result<(), ChirpyError> {
        chirps::delete_owned(&self.store, id, requester).await?;
        tracing::info!(chirp_id = %id, user_id = %requester, "Deleted chirp");
        Ok(())
    }
}
