//! Debt Settlement Core - Rust Engine
//!
//! Computes the minimum (or near-minimum) set of transfers that settles a
//! group's pairwise IOUs, with four independent algorithms over the same
//! input so their behavior and complexity trade-offs can be compared.
//!
//! # Architecture
//!
//! - **models**: Domain types (Transaction, NetBalances, SettlementReport)
//! - **settlement**: The four settlement algorithms and the engine surface
//!   (batch validation, per-algorithm dispatch, parallel run-all)
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (smallest currency unit)
//! 2. Net balances of any closed transaction set sum to exactly zero
//! 3. Applying a report's transfers to the input's net balances drives
//!    every balance to exactly zero
//! 4. Every tie-break is pinned to first-seen (insertion) order, so each
//!    algorithm is fully deterministic for a given input list

// Module declarations
pub mod models;
pub mod settlement;

// Re-exports for convenience
pub use models::{
    balance::{BalanceEntry, NetBalances},
    report::{SettlementReport, SettlementTransfer},
    transaction::{Transaction, TransactionError},
};
pub use settlement::{run_all, settle, validate, Algorithm, ComparisonReport, SettlementError};
