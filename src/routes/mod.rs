//! Axum route handlers, one module per resource.

pub mod auth;
pub mod market;
pub mod transactions;
pub mod wallet;

use axum::{response::IntoResponse, Json};
use serde_json::json;

// ─── GET /api/health ──────────────────────────────────────────────────────────

/// Liveness probe — no auth, no state.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
