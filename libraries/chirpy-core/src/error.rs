//! Core error types for Chirpy

use thiserror::Error;

/// Result type alias using `ChirpyError`
pub type Result<T> = std::result::Result<T, ChirpyError>;

/// Why an authentication attempt or presented credential was refused
///
/// The variants stay distinct for diagnostics; the HTTP layer collapses all of
/// them to the same "unauthorized" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No account exists for the presented email
    #[error("account not found")]
    NotFound,

    /// The password did not verify against the stored hash
    #[error("bad credentials")]
    BadCredentials,

    /// The token signature does not match the server secret
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token is past its expiry time
    #[error("token expired")]
    Expired,

    /// The token or its claims could not be parsed
    #[error("malformed token")]
    Malformed,

    /// A correctly signed token of the wrong kind
    #[error("invalid token issuer")]
    InvalidIssuer,

    /// No credential was supplied
    #[error("missing credential")]
    MissingCredential,

    /// The authorization header is not of the form `Bearer <token>`
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Core error type for Chirpy
#[derive(Error, Debug)]
pub enum ChirpyError {
    /// Malformed client input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record, e.g. `Chirp`
        entity: String,
        /// Identity that was looked up
        id: String,
    },

    /// Authentication failure
    #[error("Rejected: {0}")]
    Rejected(Rejection),

    /// Authenticated, but not allowed to touch the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Another account already uses this email
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Reading or writing the durable document failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Password hashing or token signing failed internally
    #[error("Hashing error: {0}")]
    Hashing(String),
}

impl ChirpyError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for errors caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_) | Self::Hashing(_))
    }
}

impl From<Rejection> for ChirpyError {
    fn from(reason: Rejection) -> Self {
        Self::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_converts_into_rejected() {
        let err: ChirpyError = Rejection::Expired.into();
        assert!(matches!(err, ChirpyError::Rejected(Rejection::Expired)));
    }

    #[test]
    fn server_faults_are_not_client_errors() {
        assert!(!ChirpyError::storage("disk full").is_client_error());
        assert!(!ChirpyError::Hashing("rng".to_string()).is_client_error());
        assert!(ChirpyError::not_found("Chirp", 3).is_client_error());
        assert!(ChirpyError::Rejected(Rejection::BadCredentials).is_client_error());
    }

    #[test]
    fn not_found_message_names_entity() {
        let err = ChirpyError::not_found("User", 42);
        assert_eq!(err.to_string(), "User not found: 42");
    }
}
