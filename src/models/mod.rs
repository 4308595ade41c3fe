//! Domain models shared across the entire UniTrade system.

pub mod market;
pub mod transaction;
pub mod user;
pub mod wallet;

pub use market::{Asset, ExchangeRates, MarketSnapshot};
pub use transaction::{TradeType, Transaction};
pub use user::{PublicUser, User};
pub use wallet::{Holding, Wallet};
