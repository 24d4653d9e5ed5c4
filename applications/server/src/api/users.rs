/// User account API routes
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use chirpy_core::{ChirpyError, User, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user; never includes the password hash
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub is_chirpy_red: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
        }
    }
}

impl UserRequest {
    fn validate(&self) -> std::result::Result<(), ChirpyError> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(ChirpyError::validation("A valid email is required"));
        }
        if self.password.is_empty() {
            return Err(ChirpyError::validation("Password is required"));
        }
        Ok(())
    }
}

/// POST /api/users
/// Register a new account
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    req.validate()?;
    let user = app_state.accounts.register(&req.email, &req.password).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /api/users
/// Change the authenticated user's email and password
pub async fn update_user(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UserRequest>,
) -> Result<Json<UserResponse>> {
    req.validate()?;
    let user = app_state
        .accounts
        .update(auth.user_id(), &req.email, &req.password)
        .await?;
    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> UserRequest {
        UserRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn validation_requires_email_and_password() {
        assert!(request("a@x.com", "secret").validate().is_ok());
        assert!(request("", "secret").validate().is_err());
        assert!(request("not-an-email", "secret").validate().is_err());
        assert!(request("a@x.com", "").validate().is_err());
    }

    #[test]
    fn response_omits_password_hash() {
        let user = User::new(UserId::new(1), "a@x.com", "$2b$04$hash");
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["is_chirpy_red"], false);
        assert!(json.get("password_hash").is_none());
    }
}
