//! # routes::auth
//!
//! Account registration and login.
//!
//! ## Endpoints
//!
//! | Method | Path                 | Description                                 |
//! |--------|----------------------|---------------------------------------------|
//! | POST   | `/api/auth/register` | Create an account, reply `201 {token, user}`|
//! | POST   | `/api/auth/login`    | Verify credentials, reply `200 {token, user}`|
//!
//! Both success responses carry a bearer token plus the public projection of
//! the account.  Login failures are indistinguishable between "no such
//! email" and "wrong password".

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{
    auth::{hash_password, issue_token, verify_password},
    error::ApiError,
    models::User,
    state::SharedState,
};

// ─── POST /api/auth/register ──────────────────────────────────────────────────

/// Fields arrive as `Option` so presence is checked here, yielding the
/// API's own `400 {"message"}` shape instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

pub async fn register(
    State(state): State<SharedState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = body.username.unwrap_or_default();
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest("Missing fields".into()));
    }

    let user = User::new(username, email, hash_password(&password)?);
    let user = state.users.create(user).await?;

    let token = issue_token(user.id, &state.config.jwt_secret, state.config.jwt_ttl_hours)?;

    info!(user_id = %user.id, "📝 [AUTH] Account registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "token": token,
            "user":  user.public(),
        })),
    ))
}

// ─── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

pub async fn login(
    State(state): State<SharedState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest("Email and password are required".into()));
    }

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".into()))?;

    if !verify_password(&password, &user.password_hash) {
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }

    let token = issue_token(user.id, &state.config.jwt_secret, state.config.jwt_ttl_hours)?;

    info!(user_id = %user.id, "🔑 [AUTH] Login");

    Ok(Json(json!({
        "token": token,
        "user":  user.public(),
    })))
}
