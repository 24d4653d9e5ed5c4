/// Authentication middleware
use crate::{error::ServerError, services::auth::bearer_token, services::AuthService};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chirpy_core::{Rejection, UserId};
use chrono::Utc;
use std::sync::Arc;

/// Extension type to store authenticated user ID in request
/// Can be used as an extractor in handlers
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub UserId);

impl AuthenticatedUser {
    pub fn user_id(&self) -> UserId {
        self.0
    }
}

/// Read the `Authorization` header as text
///
/// `Ok(None)` when absent; a value that is not visible ASCII is malformed.
pub fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, Rejection> {
    headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| Rejection::MalformedHeader))
        .transpose()
}

/// Middleware that extracts and validates a bearer JWT from the Authorization header
///
/// Any correctly signed, unexpired token is accepted regardless of its kind.
pub async fn auth_middleware(
    State(auth_service): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Response {
    let user_id = match authorization_header(request.headers())
        .and_then(bearer_token)
        .and_then(|t| auth_service.validate(t, Utc::now()))
    {
        Ok(user_id) => user_id,
        Err(reason) => {
            tracing::warn!("Token verification failed: {}", reason);
            return ServerError::Auth(reason).into_response();
        }
    };

    // Insert user ID into request extensions
    request.extensions_mut().insert(AuthenticatedUser(user_id));

    next.run(request).await
}

/// Implement FromRequestParts so AuthenticatedUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(ServerError::Auth(Rejection::MissingCredential))
    }
}
