//! # models::market
//!
//! Wire types for the synthetic market feed.  All of these are ephemeral —
//! recomputed on every request, never persisted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One quoted asset (equity or cryptocurrency) in a market snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Uppercase ticker, unique within a snapshot.
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// 24-hour move as a percentage.
    pub change_24h: f64,
}

/// A full market quote, produced fresh per call.  Consecutive snapshots make
/// no continuity guarantee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSnapshot {
    pub timestamp: DateTime<Utc>,
    pub assets: Vec<Asset>,
}

/// Static USD-based fiat conversion table served at `/api/market/rates`.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRates {
    pub base: String,
    pub timestamp: DateTime<Utc>,
    pub rates: BTreeMap<String, f64>,
}
