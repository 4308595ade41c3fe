//! # models::transaction
//!
//! Defines [`Transaction`], the append-only ledger record behind every
//! trade, and [`TradeType`], the action it captures.
//!
//! A transaction is created exactly once at execution time, with a
//! server-assigned id and timestamp, and is immutable thereafter.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── TradeType ────────────────────────────────────────────────────────────────

/// The action a transaction records.
///
/// `Convert` is stored as a single credit leg, identical to `Buy` — the
/// schema has one symbol/quantity pair and cannot express a paired
/// debit/credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    Buy,
    Sell,
    Convert,
}

impl FromStr for TradeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(TradeType::Buy),
            "SELL" => Ok(TradeType::Sell),
            "CONVERT" => Ok(TradeType::Convert),
            _ => Err(()),
        }
    }
}

// ─── Transaction ──────────────────────────────────────────────────────────────

/// One executed trade, as appended to the ledger and returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub asset_symbol: String,
    pub quantity: f64,
    /// Execution price as supplied by the caller — there is no server-side
    /// price authority checking it against the market snapshot.
    pub price_at_transaction: f64,
    /// `quantity × price_at_transaction`, fixed at execution time.
    pub fiat_equivalent: f64,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Build a new ledger record with a server-assigned id and timestamp.
    pub fn new(
        user_id: Uuid,
        trade_type: TradeType,
        asset_symbol: String,
        quantity: f64,
        price_at_transaction: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            trade_type,
            asset_symbol,
            quantity,
            price_at_transaction,
            fiat_equivalent: quantity * price_at_transaction,
            date: Utc::now(),
        }
    }
}
