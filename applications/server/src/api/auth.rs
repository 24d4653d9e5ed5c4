/// Authentication API routes
use crate::{
    error::Result, middleware::authorization_header, services::auth::bearer_token,
    state::AppState,
};
use axum::{extract::State, http::HeaderMap, Json};
use chirpy_core::UserId;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: UserId,
    pub email: String,
    pub is_chirpy_red: bool,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

/// POST /api/login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = app_state
        .accounts
        .authenticate(&req.email, &req.password)
        .await?;

    // Create tokens
    let now = Utc::now();
    let token = app_state.auth_service.issue_access_token(user.id, now)?;
    let refresh_token = app_state.auth_service.issue_refresh_token(user.id, now)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        id: user.id,
        email: user.email,
        is_chirpy_red: user.is_chirpy_red,
        token,
        refresh_token,
    }))
}

/// POST /api/refresh
/// Exchange the refresh token in the Authorization header for a new access token
pub async fn refresh(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>> {
    let refresh_token = bearer_token(authorization_header(&headers)?)?;

    let token = app_state.auth_service.refresh(refresh_token, Utc::now())?;

    Ok(Json(RefreshResponse { token }))
}
