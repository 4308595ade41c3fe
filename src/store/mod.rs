//! # store — Repository Interfaces
//!
//! The persistence seam.  Handlers only ever see these traits, injected via
//! [`AppState`](crate::state::AppState) as trait objects — never a concrete
//! store, never a module-level singleton.  The bundled backend is the
//! in-memory [`MemoryStore`]; a document store would implement the same two
//! traits.
//!
//! Methods return `Result` even where the in-memory backend cannot fail,
//! because an external backend can.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::{Transaction, User},
};

pub use memory::MemoryStore;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account.  Fails with `Conflict` when the email is
    /// already registered.
    async fn create(&self, user: User) -> Result<User, ApiError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Append an immutable record to the ledger.  Once this returns, the
    /// record is visible to every subsequent read in this process.
    async fn append(&self, tx: Transaction) -> Result<Transaction, ApiError>;

    /// All transactions for one user, most recent first.  Unknown users
    /// yield an empty list, not an error.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>, ApiError>;
}
