//! # models::wallet
//!
//! Derived portfolio types.  A [`Wallet`] has no identity or storage of its
//! own — it is a pure function of the user's transactions and one market
//! snapshot, and lives only for a single request/response cycle.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Net position in a single asset.  Only strictly positive quantities are
/// ever reported; zero and oversold positions are filtered out upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holding {
    pub symbol: String,
    pub quantity: f64,
}

/// The derived portfolio returned by `/api/user/wallet`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub holdings: Vec<Holding>,
    pub total_net_worth: f64,
    /// Timestamp of the market snapshot used for valuation — two wallet
    /// reads moments apart may value identical holdings differently.
    pub timestamp: DateTime<Utc>,
}
