//! # auth — Passwords & Bearer Tokens
//!
//! Two concerns live here:
//!
//! 1. **Password hashing** — bcrypt with a fixed cost, verify on login.
//! 2. **Bearer tokens** — HS256 JWTs carrying the user id; issued on
//!    register/login, demanded by every protected route via the
//!    [`AuthUser`] extractor.
//!
//! ## Status codes
//! - No `Authorization: Bearer <token>` header → `401 Missing token`
//! - Token present but invalid or expired     → `403 Invalid token`

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::ApiError, state::SharedState};

const BCRYPT_COST: u32 = 10;

// ─── Passwords ────────────────────────────────────────────────────────────────

pub fn hash_password(raw: &str) -> anyhow::Result<String> {
    Ok(bcrypt::hash(raw, BCRYPT_COST)?)
}

/// A malformed stored hash counts as a mismatch rather than an error —
/// login then fails with the same "Invalid credentials" as a wrong password.
pub fn verify_password(raw: &str, hash: &str) -> bool {
    bcrypt::verify(raw, hash).unwrap_or(false)
}

// ─── Tokens ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

pub fn issue_token(user_id: Uuid, secret: &str, ttl_hours: i64) -> anyhow::Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::hours(ttl_hours)).timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

/// Decode and validate a token. `Validation::default()` checks the
/// signature and the `exp` claim.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

// ─── Extractor ────────────────────────────────────────────────────────────────

/// The authenticated caller, extracted from the `Authorization` header.
///
/// Adding `user: AuthUser` to a handler signature is all it takes to
/// protect a route.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Missing token".into()))?;

        let claims = verify_token(token, &state.config.jwt_secret).map_err(|e| {
            tracing::warn!(error = %e, "rejected bearer token");
            ApiError::Forbidden("Invalid token".into())
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
