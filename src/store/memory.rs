//! # store::memory
//!
//! In-process backend: two `tokio::sync::RwLock`-guarded collections.
//! Each repository call is atomic on its own; there is no cross-call
//! transaction boundary, so concurrent writers interleave last-write-wins.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth,
    error::ApiError,
    models::{Transaction, User},
    store::{TransactionRepository, UserRepository},
};

/// Demo logins created at startup when `SEED_DEMO_ACCOUNTS` is on.
const DEMO_ACCOUNTS: &[(&str, &str)] = &[
    ("demo_trader", "demo@unitrade.com"),
    ("john_doe", "john@example.com"),
    ("jane_smith", "jane@example.com"),
    ("crypto_enthusiast", "crypto@example.com"),
];

const DEMO_PASSWORD: &str = "password";

#[derive(Default)]
pub struct MemoryStore {
    /// Accounts keyed by email — the registration uniqueness key.
    users: RwLock<HashMap<String, User>>,
    /// The append-only ledger, across all users.
    transactions: RwLock<Vec<Transaction>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the demo accounts, all sharing the password `password`.
    /// One bcrypt hash is computed and reused so startup stays quick.
    pub async fn seed_demo_accounts(&self) -> anyhow::Result<()> {
        let hash = auth::hash_password(DEMO_PASSWORD)?;

        let mut users = self.users.write().await;
        for (username, email) in DEMO_ACCOUNTS {
            users
                .entry((*email).to_string())
                .or_insert_with(|| User::new((*username).to_string(), (*email).to_string(), hash.clone()));
        }

        info!(count = DEMO_ACCOUNTS.len(), "👥 Demo accounts seeded");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: User) -> Result<User, ApiError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(ApiError::Conflict("Email already registered".into()));
        }

        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl TransactionRepository for MemoryStore {
    async fn append(&self, tx: Transaction) -> Result<Transaction, ApiError> {
        let mut ledger = self.transactions.write().await;
        ledger.push(tx.clone());
        Ok(tx)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>, ApiError> {
        let ledger = self.transactions.read().await;

        let mut list: Vec<Transaction> = ledger
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(list)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
