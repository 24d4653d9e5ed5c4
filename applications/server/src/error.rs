/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chirpy_core::{ChirpyError, Rejection};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(Rejection),

    #[error(transparent)]
    Chirpy(#[from] ChirpyError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<Rejection> for ServerError {
    fn from(reason: Rejection) -> Self {
        ServerError::Auth(reason)
    }
}

impl ServerError {
    fn unauthorized(reason: Rejection) -> (StatusCode, String) {
        // Reasons stay in the logs; clients only learn that they were refused.
        tracing::debug!("Request rejected: {}", reason);
        (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Auth(reason) => Self::unauthorized(reason),
            ServerError::Chirpy(err) => match err {
                ChirpyError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
                ChirpyError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                ChirpyError::Rejected(reason) => Self::unauthorized(reason),
                ChirpyError::Forbidden(msg) => {
                    tracing::warn!("Forbidden: {}", msg);
                    (StatusCode::FORBIDDEN, "Forbidden".to_string())
                }
                ChirpyError::DuplicateEmail(_) => (
                    StatusCode::CONFLICT,
                    "Email already registered".to_string(),
                ),
                ChirpyError::Storage(ref msg) => {
                    tracing::error!("Storage error: {}", msg);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Storage error".to_string(),
                    )
                }
                ChirpyError::Hashing(ref msg) => {
                    tracing::error!("Password hashing error: {}", msg);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Password error".to_string(),
                    )
                }
            },
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<ServerError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            status_of(ChirpyError::validation("too long")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ChirpyError::not_found("Chirp", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ChirpyError::forbidden("not yours")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(ChirpyError::DuplicateEmail("a@x.com".to_string())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn every_rejection_collapses_to_unauthorized() {
        for reason in [
            Rejection::NotFound,
            Rejection::BadCredentials,
            Rejection::InvalidSignature,
            Rejection::Expired,
            Rejection::Malformed,
            Rejection::InvalidIssuer,
            Rejection::MissingCredential,
            Rejection::MalformedHeader,
        ] {
            assert_eq!(status_of(reason), StatusCode::UNAUTHORIZED);
            assert_eq!(
                status_of(ChirpyError::Rejected(reason)),
                StatusCode::UNAUTHORIZED
            );
        }
    }

    #[test]
    fn server_faults_map_to_500() {
        assert_eq!(
            status_of(ChirpyError::storage("disk gone")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ServerError::Config("no secret".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
