//! # state
//!
//! Top-level shared state injected into every Axum handler: the runtime
//! [`Config`] plus the two repository trait objects.  Handlers depend on
//! the traits only, so swapping the in-memory backend for a document store
//! is a change to [`build_state`] alone.

use std::sync::Arc;

use crate::{
    config::Config,
    store::{MemoryStore, TransactionRepository, UserRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<dyn UserRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
}

/// Convenience type alias
pub type SharedState = Arc<AppState>;

/// Build the shared state over the in-memory backend, seeding the demo
/// accounts when the config asks for them.
pub async fn build_state(config: Config) -> anyhow::Result<SharedState> {
    let store = Arc::new(MemoryStore::new());

    if config.seed_demo_accounts {
        store.seed_demo_accounts().await?;
    }

    Ok(Arc::new(AppState {
        config,
        users: store.clone() as Arc<dyn UserRepository>,
        transactions: store as Arc<dyn TransactionRepository>,
    }))
}
