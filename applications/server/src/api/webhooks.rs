/// Payment provider webhook routes
use crate::{error::Result, middleware::authorization_header, state::AppState};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chirpy_core::{ChirpyError, Rejection, UserId};
use serde::Deserialize;

/// The only event that changes state
pub const USER_UPGRADED: &str = "user.upgraded";

#[derive(Debug, Deserialize)]
pub struct PolkaEvent {
    pub event: String,
    #[serde(default)]
    pub data: PolkaEventData,
}

/// Payload fields vary by event; only upgrades need a user
#[derive(Debug, Default, Deserialize)]
pub struct PolkaEventData {
    pub user_id: Option<UserId>,
}

/// Extract the key from an `Authorization: ApiKey <key>` header value
pub fn api_key(header: Option<&str>) -> std::result::Result<&str, Rejection> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Err(Rejection::MissingCredential),
    };

    match header.split_once(' ') {
        Some(("ApiKey", key)) if !key.is_empty() => Ok(key),
        _ => Err(Rejection::MalformedHeader),
    }
}

/// POST /api/polka/webhooks
/// Events other than `user.upgraded` are acknowledged and ignored
///
/// The key is checked before the body is parsed.
pub async fn polka_webhook(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode> {
    let key = api_key(authorization_header(&headers)?)?;
    if app_state.polka_api_key.is_empty() || key != &*app_state.polka_api_key {
        return Err(Rejection::BadCredentials.into());
    }

    let event: PolkaEvent = serde_json::from_slice(&body)
        .map_err(|e| ChirpyError::validation(format!("Invalid webhook payload: {e}")))?;

    if event.event != USER_UPGRADED {
        tracing::debug!("Ignoring webhook event {}", event.event);
        return Ok(StatusCode::NO_CONTENT);
    }

    let user_id = event
        .data
        .user_id
        .ok_or_else(|| ChirpyError::validation("Upgrade event is missing data.user_id"))?;
    app_state.accounts.apply_upgrade(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
