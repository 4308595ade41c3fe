//! # routes::wallet
//!
//! ## Endpoints
//!
//! | Method | Path               | Description                                |
//! |--------|--------------------|--------------------------------------------|
//! | GET    | `/api/user/wallet` | Derived holdings + net worth, bearer-authed|
//!
//! Every call takes a fresh market snapshot, so two reads moments apart can
//! report different net worth for identical holdings.

use axum::{extract::State, response::IntoResponse, Json};

use crate::{auth::AuthUser, error::ApiError, market, state::SharedState, wallet};

// ─── GET /api/user/wallet ─────────────────────────────────────────────────────

pub async fn get_wallet(
    State(state): State<SharedState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let transactions = state.transactions.list_for_user(user.user_id).await?;
    let snapshot = market::market_snapshot();

    Ok(Json(wallet::compute_wallet(&transactions, &snapshot)))
}
