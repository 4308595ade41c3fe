//! # wallet — Portfolio Derivation
//!
//! Recomputes a user's holdings and net worth by replaying their full
//! transaction log against one market snapshot.  Nothing here is cached or
//! stored: the wallet is derived fresh on every request, and the valuation
//! is only as stable as the snapshot it was handed.

use std::collections::HashMap;

use crate::models::{Holding, MarketSnapshot, TradeType, Transaction, Wallet};

/// Price assumed for a held symbol the current snapshot does not quote.
/// Net worth is misstated for such symbols.
const MISSING_PRICE_FALLBACK: f64 = 1.0;

/// Derive the wallet for one user from their transactions and a snapshot.
///
/// The aggregation is a plain signed sum per symbol, so transaction order
/// is irrelevant.  `SELL` debits; `BUY` and `CONVERT` both credit (a
/// conversion is recorded as a single leg).  Only strictly positive net
/// quantities are reported: positions that net to zero — or below, since
/// overselling is never rejected — are dropped rather than shown as shorts.
pub fn compute_wallet(transactions: &[Transaction], market: &MarketSnapshot) -> Wallet {
    // ── 1. Fold the ledger into signed per-symbol quantities ─────────────────
    let mut quantities: HashMap<&str, f64> = HashMap::new();
    for tx in transactions {
        let signed = match tx.trade_type {
            TradeType::Sell => -tx.quantity,
            TradeType::Buy | TradeType::Convert => tx.quantity,
        };
        *quantities.entry(tx.asset_symbol.as_str()).or_insert(0.0) += signed;
    }

    // ── 2. Keep only live positions, in a stable order ───────────────────────
    let mut holdings: Vec<Holding> = quantities
        .into_iter()
        .filter(|(_, quantity)| *quantity > 0.0)
        .map(|(symbol, quantity)| Holding {
            symbol: symbol.to_string(),
            quantity,
        })
        .collect();
    holdings.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    // ── 3. Value them against the snapshot ───────────────────────────────────
    let prices: HashMap<&str, f64> = market
        .assets
        .iter()
        .map(|a| (a.symbol.as_str(), a.price))
        .collect();

    let total_net_worth = holdings
        .iter()
        .map(|h| {
            let price = prices
                .get(h.symbol.as_str())
                .copied()
                .unwrap_or(MISSING_PRICE_FALLBACK);
            price * h.quantity
        })
        .sum();

    Wallet {
        holdings,
        total_net_worth,
        timestamp: market.timestamp,
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
