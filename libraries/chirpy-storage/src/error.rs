/// Storage-specific errors
use chirpy_core::{ChirpId, ChirpyError, UserId};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// The document exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document was read but is not valid JSON for the expected layout
    #[error("Corrupt document {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Another user already has this email
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// The chirp belongs to someone else
    #[error("Chirp {chirp_id} is not owned by user {requester}")]
    NotOwner { chirp_id: ChirpId, requester: UserId },
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

impl From<StorageError> for ChirpyError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => ChirpyError::NotFound { entity, id },
            StorageError::DuplicateEmail(email) => ChirpyError::DuplicateEmail(email),
            StorageError::NotOwner { .. } => ChirpyError::forbidden(err.to_string()),
            other => ChirpyError::storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_faults_keep_their_kind() {
        let err: ChirpyError = StorageError::not_found("Chirp", 1).into();
        assert!(matches!(err, ChirpyError::NotFound { .. }));

        let err: ChirpyError = StorageError::DuplicateEmail("a@x.com".to_string()).into();
        assert!(matches!(err, ChirpyError::DuplicateEmail(ref e) if e == "a@x.com"));

        let err: ChirpyError = StorageError::NotOwner {
            chirp_id: ChirpId::new(1),
            requester: UserId::new(2),
        }
        .into();
        assert!(matches!(err, ChirpyError::Forbidden(_)));
    }

    #[test]
    fn io_faults_become_storage_errors() {
        let err: ChirpyError = StorageError::Write {
            path: PathBuf::from("/nope/db.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert!(matches!(err, ChirpyError::Storage(ref msg) if msg.contains("/nope/db.json")));
    }
}
