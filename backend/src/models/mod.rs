//! Domain models for the settlement engine

pub mod balance;
pub mod report;
pub mod transaction;

// Re-exports
pub use balance::{BalanceEntry, NetBalances};
pub use report::{Algorithm, SettlementReport, SettlementTransfer};
pub use transaction::{Transaction, TransactionError};
