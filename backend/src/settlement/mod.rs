//! Settlement Module
//!
//! The engine surface over the four settlement algorithms:
//! - Batch validation (rejects the whole input before any algorithm runs)
//! - Per-algorithm dispatch via [`settle`]
//! - Parallel run-all comparison via [`run_all`]
//!
//! Each algorithm is a pure function of the input transaction list: it
//! allocates its own local structures (sorted vectors, adjacency lists,
//! disjoint-set forest, heaps), holds no cross-call state, and never
//! mutates shared data. That is what makes the run-all fan-out safe with
//! no synchronization beyond the join.
//!
//! # Critical Invariants
//!
//! 1. **Validation first**: errors in the batch are reported before any
//!    algorithm runs; a validated batch reaches every algorithm unchanged
//! 2. **Zero-sum**: aggregated balances of a validated batch sum to zero;
//!    a violation is an internal bug surfaced as [`SettlementError::UnbalancedLedger`]
//! 3. **Independent outcomes**: in [`run_all`], one algorithm's failure is
//!    captured as that algorithm's outcome and never disturbs the others
//!
//! # Example
//!
//! ```rust
//! use debt_settlement_core_rs::{settle, Algorithm, Transaction};
//!
//! let txs = vec![
//!     Transaction::new("A".to_string(), "B".to_string(), 10),
//!     Transaction::new("B".to_string(), "C".to_string(), 10),
//! ];
//!
//! let report = settle(Algorithm::Greedy, &txs).unwrap();
//! assert_eq!(report.settlement_count, 1);
//! assert_eq!(report.transfers[0].from, "A");
//! assert_eq!(report.transfers[0].to, "C");
//! ```

pub mod components;
pub mod graph;
pub mod greedy;
pub mod heap;

use crate::models::balance::NetBalances;
use crate::models::report::SettlementReport;
use crate::models::transaction::{Transaction, TransactionError};
use rayon::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

// Re-export so callers can name algorithms without reaching into models
pub use crate::models::report::Algorithm;

/// Errors that can occur during settlement computation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettlementError {
    #[error("no transactions supplied")]
    EmptyInput,

    #[error("invalid transaction at index {index}: {source}")]
    InvalidTransaction {
        index: usize,
        #[source]
        source: TransactionError,
    },

    #[error("net balances sum to {sum}, expected 0")]
    UnbalancedLedger { sum: i64 },

    #[error("balance for {person} left unsettled: {remaining}")]
    UnsettledBalance { person: String, remaining: i64 },
}

/// Validate a transaction batch
///
/// Rejects the whole batch on the first problem found: an empty batch, or
/// any record with a missing participant, a self-transfer, or a
/// non-positive amount. Runs before any algorithm; algorithms assume a
/// validated batch.
pub fn validate(transactions: &[Transaction]) -> Result<(), SettlementError> {
    if transactions.is_empty() {
        return Err(SettlementError::EmptyInput);
    }
    for (index, tx) in transactions.iter().enumerate() {
        tx.validate()
            .map_err(|source| SettlementError::InvalidTransaction { index, source })?;
    }
    Ok(())
}

/// Aggregate net balances and check the zero-sum invariant
///
/// The sum of net balances over a closed transaction set is zero by
/// construction; a non-zero sum indicates a bug, not a user error.
pub(crate) fn aggregate_checked(
    transactions: &[Transaction],
) -> Result<NetBalances, SettlementError> {
    let balances = NetBalances::aggregate(transactions);
    let sum = balances.total();
    if sum != 0 {
        return Err(SettlementError::UnbalancedLedger { sum });
    }
    Ok(balances)
}

/// Run one algorithm over a validated batch
fn run_validated(
    algorithm: Algorithm,
    transactions: &[Transaction],
) -> Result<SettlementReport, SettlementError> {
    match algorithm {
        Algorithm::Greedy => greedy::run(transactions),
        Algorithm::GraphDfs => graph::run(transactions),
        Algorithm::UnionFind => components::run(transactions),
        Algorithm::Heap => heap::run(transactions),
    }
}

/// Validate a batch and run one settlement algorithm over it
///
/// # Returns
///
/// - `Ok(SettlementReport)` with the ordered transfers and metadata
/// - `Err(SettlementError)` for an invalid batch, or for an internal
///   invariant violation inside the algorithm
pub fn settle(
    algorithm: Algorithm,
    transactions: &[Transaction],
) -> Result<SettlementReport, SettlementError> {
    validate(transactions)?;
    run_validated(algorithm, transactions)
}

/// Combined outcome of running all four algorithms over one batch
///
/// Outcomes are keyed by [`Algorithm`] (identifier order 1-4). A failed
/// algorithm carries its own error; the others' reports are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Per-algorithm outcome, in identifier order
    pub outcomes: BTreeMap<Algorithm, Result<SettlementReport, SettlementError>>,
}

impl ComparisonReport {
    /// Outcome of one algorithm
    pub fn outcome(&self, algorithm: Algorithm) -> Option<&Result<SettlementReport, SettlementError>> {
        self.outcomes.get(&algorithm)
    }

    /// Report of one algorithm, if it succeeded
    pub fn report(&self, algorithm: Algorithm) -> Option<&SettlementReport> {
        match self.outcomes.get(&algorithm) {
            Some(Ok(report)) => Some(report),
            _ => None,
        }
    }

    /// True if every algorithm produced a report
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.values().all(|outcome| outcome.is_ok())
    }
}

/// Validate once, then run all four algorithms in parallel
///
/// Fan-out/fan-in: each algorithm runs as an independent rayon task over
/// the shared read-only transaction slice; the join collects all four
/// outcomes before returning. `Err` is returned only for batch validation
/// failures - an algorithm's own failure is captured in its outcome.
///
/// # Example
///
/// ```rust
/// use debt_settlement_core_rs::{run_all, Algorithm, Transaction};
///
/// let txs = vec![Transaction::new("A".to_string(), "B".to_string(), 10)];
/// let comparison = run_all(&txs).unwrap();
///
/// assert!(comparison.all_succeeded());
/// assert_eq!(comparison.report(Algorithm::Heap).unwrap().settlement_count, 1);
/// ```
pub fn run_all(transactions: &[Transaction]) -> Result<ComparisonReport, SettlementError> {
    validate(transactions)?;

    let outcomes: BTreeMap<Algorithm, Result<SettlementReport, SettlementError>> = Algorithm::ALL
        .par_iter()
        .map(|&algorithm| (algorithm, run_validated(algorithm, transactions)))
        .collect();

    Ok(ComparisonReport { outcomes })
}
