//! # UniTrade — Demo Trading Simulator Backend
//!
//! Core library consumed by the thin Axum binary in `main.rs`.  Everything
//! below the transport layer lives here so the same logic serves any future
//! deployment target without duplication.
//!
//! ## Module map
//!
//! | Module    | Responsibility                                            |
//! |-----------|-----------------------------------------------------------|
//! | `market`  | Synthetic market snapshot generator + exchange rates      |
//! | `wallet`  | Holdings & net-worth derivation from the transaction log  |
//! | `store`   | Repository traits + in-memory backend                     |
//! | `auth`    | Password hashing, JWT issue/verify, bearer extractor      |
//! | `routes`  | Axum handlers per resource                                |
//! | `server`  | Router construction (shared by the binary and tests)      |
//! | `models`  | Domain structs serialized on the wire                     |
//! | `config`  | Environment-derived runtime configuration                 |
//! | `error`   | Central `ApiError` type + HTTP response mapping           |

pub mod auth;
pub mod config;
pub mod error;
pub mod market;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod wallet;
