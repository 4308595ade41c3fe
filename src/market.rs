//! # market — Synthetic Market Data Generator
//!
//! Produces a fresh quote for a fixed catalog of ten assets (five equities,
//! five cryptocurrencies) on every call.  Prices are a seeded pseudo-random
//! function of the wall clock: identical timestamps reproduce identical
//! snapshots, but consecutive calls make no continuity guarantee — prices
//! may jump arbitrarily between requests.
//!
//! Pure computation throughout: no persistence, no side effects, no failure
//! modes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{Asset, ExchangeRates, MarketSnapshot};

/// Fixed asset catalog — symbol, display name.  Catalog position doubles as
/// the per-asset seed offset, so each symbol gets its own price path.
const ASSET_CATALOG: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft"),
    ("GOOGL", "Alphabet"),
    ("AMZN", "Amazon"),
    ("TSLA", "Tesla"),
    ("BTC", "Bitcoin"),
    ("ETH", "Ethereum"),
    ("SOL", "Solana"),
    ("XRP", "Ripple"),
    ("ADA", "Cardano"),
];

// ─── Seeded PRNG ──────────────────────────────────────────────────────────────

/// Deterministic hash of a seed into `[0, 1)`.
///
/// `x - floor(x)` rather than `fract()`: the sine is signed, and a negative
/// fract would fall outside the unit interval.
fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ─── Snapshot ─────────────────────────────────────────────────────────────────

/// Quote the full catalog as of `now`.  Factored out of the wall-clock entry
/// point so tests can pin the timestamp.
///
/// Per asset at catalog index `idx`:
/// * `base = 50 + idx × 30`
/// * `price ∈ [base, 2 × base)`, so always strictly positive
/// * `change24h ∈ [-5, 5)` percent
pub fn snapshot_at(now: DateTime<Utc>) -> MarketSnapshot {
    let millis = now.timestamp_millis() as f64;

    let assets = ASSET_CATALOG
        .iter()
        .enumerate()
        .map(|(idx, (symbol, name))| {
            let idx = idx as f64;
            let base = 50.0 + idx * 30.0;
            Asset {
                symbol: (*symbol).to_string(),
                name: (*name).to_string(),
                price: round2(base + seeded_random(millis / 1000.0 + idx) * base),
                change_24h: round2(-5.0 + seeded_random(millis / 500.0 + idx) * 10.0),
            }
        })
        .collect();

    MarketSnapshot {
        timestamp: now,
        assets,
    }
}

/// The public entry point: quote the catalog at the current wall clock.
pub fn market_snapshot() -> MarketSnapshot {
    snapshot_at(Utc::now())
}

// ─── Exchange Rates ───────────────────────────────────────────────────────────

/// Static USD-based conversion table with a fresh timestamp per call.
pub fn exchange_rates() -> ExchangeRates {
    let rates = BTreeMap::from([
        ("USD".to_string(), 1.0),
        ("EUR".to_string(), 0.92),
        ("INR".to_string(), 83.1),
    ]);

    ExchangeRates {
        base: "USD".to_string(),
        timestamp: Utc::now(),
        rates,
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
