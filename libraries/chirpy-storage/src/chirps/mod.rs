//! Chirp queries and mutations

use crate::{JsonStore, Result, StorageError};
use chirpy_core::{AuthorFilter, Chirp, ChirpId, SortOrder, UserId};

/// Store a new chirp under the next chirp identity
pub async fn create(store: &JsonStore, body: &str, author_id: UserId) -> Result<Chirp> {
    let chirp = store
        .write(|doc| Ok(doc.insert_chirp(body, author_id)))
        .await?;
    tracing::debug!(chirp_id = %chirp.id, author_id = %author_id, "Created chirp");
    Ok(chirp)
}

/// Get a chirp by identity
pub async fn get(store: &JsonStore, id: ChirpId) -> Result<Chirp> {
    store
        .read(|doc| {
            doc.chirp(id)
                .cloned()
                .ok_or_else(|| StorageError::not_found("Chirp", id))
        })
        .await
}

/// List chirps passing `filter`, ordered by identity
pub async fn list(store: &JsonStore, filter: AuthorFilter, order: SortOrder) -> Result<Vec<Chirp>> {
    store
        .read(|doc| {
            let matching = doc.chirps().filter(|c| filter.matches(c)).cloned();
            Ok(match order {
                SortOrder::Asc => matching.collect(),
                SortOrder::Desc => matching.rev().collect(),
            })
        })
        .await
}

/// Remove a chirp; removing an identity that is not stored succeeds
///
/// Returns the removed chirp, if there was one.
pub async fn delete(store: &JsonStore, id: ChirpId) -> Result<Option<Chirp>> {
    store.write(|doc| Ok(doc.remove_chirp(id))).await
}

/// Remove a chirp only if `requester` wrote it
///
/// Existence and ownership are checked in the same locked cycle as the removal.
pub async fn delete_owned(store: &JsonStore, id: ChirpId, requester: UserId) -> Result<Chirp> {
    store
        .write(|doc| {
            let chirp = doc
                .chirp(id)
                .ok_or_else(|| StorageError::not_found("Chirp", id))?;
            if chirp.author_id != requester {
                return Err(StorageError::NotOwner {
                    chirp_id: id,
                    requester,
                });
            }
            doc.remove_chirp(id)
                .ok_or_else(|| StorageError::not_found("Chirp", id))
        })
        .await
}
