//! # server
//!
//! Router construction, kept out of `main` so the integration tests drive
//! exactly the service the binary serves.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::{
    auth::{login, register},
    health_check,
    market::{market_overview, market_rates},
    transactions::{execute_trade, transaction_history},
    wallet::get_wallet,
};
use crate::state::SharedState;

pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any) // Tighten in production!
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // ── Auth ─────────────────────────────────────────────────────────────
        .route("/api/auth/register",        post(register))
        .route("/api/auth/login",           post(login))
        // ── Market (public) ──────────────────────────────────────────────────
        .route("/api/market/overview",      get(market_overview))
        .route("/api/market/rates",         get(market_rates))
        // ── Ledger ───────────────────────────────────────────────────────────
        .route("/api/transactions/execute", post(execute_trade))
        .route("/api/transactions/history", get(transaction_history))
        // ── Wallet ───────────────────────────────────────────────────────────
        .route("/api/user/wallet",          get(get_wallet))
        // ── Ops ──────────────────────────────────────────────────────────────
        .route("/api/health",               get(health_check))
        // ── Middleware ───────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
