//! # routes::transactions
//!
//! Trade execution and history, both bearer-authed.
//!
//! ## Endpoints
//!
//! | Method | Path                         | Description                       |
//! |--------|------------------------------|-----------------------------------|
//! | POST   | `/api/transactions/execute`  | Append a trade, `201 {transaction}` |
//! | GET    | `/api/transactions/history`  | The caller's trades, newest first |

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{
    auth::AuthUser,
    error::ApiError,
    models::{TradeType, Transaction},
    state::SharedState,
};

// ─── POST /api/transactions/execute ───────────────────────────────────────────

/// All fields optional at the serde layer; validation below produces the
/// API's `400 {"message"}` shape.  The type arrives as a raw string so an
/// unknown value is a 400, not a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteTradeRequest {
    #[serde(rename = "type")]
    trade_type: Option<String>,
    asset_symbol: Option<String>,
    quantity: Option<f64>,
    price_at_transaction: Option<f64>,
}

/// Append a trade to the ledger.
///
/// The caller supplies the execution price; it is not checked against the
/// market snapshot.  Nor is a SELL checked against current holdings — an
/// oversell is recorded as-is and nets negative in the ledger.
pub async fn execute_trade(
    State(state): State<SharedState>,
    user: AuthUser,
    Json(body): Json<ExecuteTradeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // ── Validation ────────────────────────────────────────────────────────────
    let (Some(trade_type), Some(asset_symbol), Some(quantity), Some(price)) = (
        body.trade_type,
        body.asset_symbol,
        body.quantity,
        body.price_at_transaction,
    ) else {
        return Err(ApiError::BadRequest("Missing required fields".into()));
    };

    let trade_type: TradeType = trade_type
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid trade type".into()))?;

    if asset_symbol.trim().is_empty() {
        return Err(ApiError::BadRequest("Asset symbol is required".into()));
    }
    if quantity <= 0.0 {
        return Err(ApiError::BadRequest("Quantity must be positive".into()));
    }
    if price <= 0.0 {
        return Err(ApiError::BadRequest("Price must be positive".into()));
    }

    // ── Append to the ledger ──────────────────────────────────────────────────
    let tx = Transaction::new(user.user_id, trade_type, asset_symbol, quantity, price);
    let tx = state.transactions.append(tx).await?;

    info!(
        user_id        = %tx.user_id,
        symbol         = %tx.asset_symbol,
        trade_type     = ?tx.trade_type,
        quantity       = tx.quantity,
        fiat_equivalent = tx.fiat_equivalent,
        "💱 [TRADE] Recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "transaction": tx })),
    ))
}

// ─── GET /api/transactions/history ────────────────────────────────────────────

/// The caller's full transaction log, most recent first.  No pagination.
pub async fn transaction_history(
    State(state): State<SharedState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let history = state.transactions.list_for_user(user.user_id).await?;
    Ok(Json(history))
}
