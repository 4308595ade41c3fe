//! # routes::market
//!
//! Public market data — no auth on either endpoint.
//!
//! ## Endpoints
//!
//! | Method | Path                   | Description                         |
//! |--------|------------------------|-------------------------------------|
//! | GET    | `/api/market/overview` | Fresh synthetic snapshot, 10 assets |
//! | GET    | `/api/market/rates`    | Static USD-based fiat rates         |

use axum::{response::IntoResponse, Json};

use crate::market;

// ─── GET /api/market/overview ─────────────────────────────────────────────────

pub async fn market_overview() -> impl IntoResponse {
    Json(market::market_snapshot())
}

// ─── GET /api/market/rates ────────────────────────────────────────────────────

pub async fn market_rates() -> impl IntoResponse {
    Json(market::exchange_rates())
}
