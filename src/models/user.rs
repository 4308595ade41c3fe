//! # models::user
//!
//! Registered accounts.  The stored [`User`] carries the bcrypt hash and is
//! deliberately not `Serialize` — API responses use the [`PublicUser`]
//! projection so the hash can never leak onto the wire.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered account as held by the [`UserRepository`].
///
/// [`UserRepository`]: crate::store::UserRepository
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Unique login key — registration conflicts are detected on this field.
    pub email: String,
    /// bcrypt hash of the account password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// The client-facing projection of this account.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// What `register` / `login` responses embed under `"user"`.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}
