//! # UniTrade — Demo Trading Simulator Backend
//!
//! ## Architecture Overview
//!
//! ```text
//!  ┌──────────────┐   POST /api/auth/*            ┌──────────────────────┐
//!  │  Web Client  │ ─────────────────────────────▶│  AppState            │
//!  │  (React SPA) │   POST /api/transactions/*    │  ├─ Config           │
//!  └──────────────┘   GET  /api/user/wallet       │  ├─ UserRepository   │
//!         │                                       │  └─ TxRepository     │
//!         │           GET /api/market/overview    └──────────┬───────────┘
//!         └──────────────────────────────────────▶           │
//!                      [market generator] ◀── [wallet aggregator]
//! ```
//!
//! Thin entry point: load env, initialise logging, build state, serve the
//! router from `unitrade::server`.  All semantics live in the library.

use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use unitrade::{config::Config, server, state::build_state};

// ─── Entry Point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env (optional — CI/prod can use real env vars) ──────────────
    dotenvy::dotenv().ok();

    // ── 2. Initialise structured logging ─────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env()
            .add_directive("unitrade=debug".parse()?)
            .add_directive("tower_http=info".parse()?))
        .init();

    info!(
        r#"

  ╔═══════════════════════════════════════════════╗
  ║        UNITRADE — Trading Simulator           ║
  ║        Market · Ledger · Wallet               ║
  ╚═══════════════════════════════════════════════╝"#
    );

    // ── 3. Resolve configuration ─────────────────────────────────────────────
    let config = Config::from_env();
    if config.jwt_secret == "dev_secret" {
        warn!("JWT_SECRET not set — using the development default");
    }

    // ── 4. Build shared state (seeds demo accounts unless disabled) ──────────
    let state = build_state(config.clone()).await?;

    // ── 5. Build the Axum router ─────────────────────────────────────────────
    let app = server::router(state);

    // ── 6. Bind & serve ──────────────────────────────────────────────────────
    let addr: SocketAddr = config.bind_addr.parse()?;
    info!(?addr, "🚀 UniTrade server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
