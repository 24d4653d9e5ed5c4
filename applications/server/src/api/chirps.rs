/// Chirps API routes
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chirpy_core::{AuthorFilter, Chirp, ChirpId, ChirpyError, SortOrder, UserId};
use serde::Deserialize;

/// Longest accepted chirp, in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const CENSORED: &str = "****";

#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListChirpsQuery {
    pub author_id: Option<UserId>,
    pub sort: Option<SortOrder>,
}

/// Check length and mask profanity
///
/// Words are split on single spaces and compared case-insensitively; the
/// original spacing of everything else is preserved.
pub fn clean_body(body: &str) -> std::result::Result<String, ChirpyError> {
    if body.trim().is_empty() {
        return Err(ChirpyError::validation("Chirp is empty"));
    }
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(ChirpyError::validation("Chirp is too long"));
    }

    let cleaned: Vec<&str> = body
        .split(' ')
        .map(|word| {
            if PROFANE_WORDS.contains(&word.to_lowercase().as_str()) {
                CENSORED
            } else {
                word
            }
        })
        .collect();
    Ok(cleaned.join(" "))
}

/// POST /api/chirps
pub async fn create_chirp(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>)> {
    let body = clean_body(&req.body)?;
    let chirp = app_state.chirps.create(auth.user_id(), &body).await?;
    Ok((StatusCode::CREATED, Json(chirp)))
}

/// GET /api/chirps?author_id=<id>&sort=asc|desc
pub async fn list_chirps(
    State(app_state): State<AppState>,
    Query(query): Query<ListChirpsQuery>,
) -> Result<Json<Vec<Chirp>>> {
    let filter = AuthorFilter::from(query.author_id);
    let chirps = app_state
        .chirps
        .list(filter, query.sort.unwrap_or_default())
        .await?;
    Ok(Json(chirps))
}

/// GET /api/chirps/:id
pub async fn get_chirp(
    State(app_state): State<AppState>,
    Path(id): Path<ChirpId>,
) -> Result<Json<Chirp>> {
    Ok(Json(app_state.chirps.get(id).await?))
}

/// DELETE /api/chirps/:id
/// Only the author may delete a chirp
pub async fn delete_chirp(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Path(id): Path<ChirpId>,
) -> Result<StatusCode> {
    app_state.chirps.delete(id, auth.user_id()).await?;
    Ok(StatusCode::NO_CONTENT)
}
