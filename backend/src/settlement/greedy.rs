//! Greedy two-pointer matcher
//!
//! Sorts the non-zero balances ascending (largest debtor first, largest
//! creditor last) and matches the extremes with two cursors: the left
//! cursor pays the right cursor `min(-left, right)`, and whichever side
//! reaches zero advances. Both advance together on an exact match.
//!
//! The sort is stable and ties break by first-seen order, so the output is
//! deterministic. For `n` non-zero balances the pass produces at most
//! `n - 1` transfers: every transfer zeroes at least one balance, and the
//! last transfer zeroes two.
//!
//! Complexity: O(n log n) sort + O(n) matching pass.

use crate::models::balance::BalanceEntry;
use crate::models::report::{Algorithm, SettlementReport, SettlementTransfer};
use crate::models::transaction::Transaction;
use crate::settlement::SettlementError;

/// Match debtors against creditors with the two-pointer pass
///
/// Takes non-zero balance entries in first-seen order; the stable sort
/// keeps that order as the tie-break. Also used by the component
/// partitioner on each component's entries.
pub(crate) fn match_entries(mut entries: Vec<BalanceEntry>) -> Vec<SettlementTransfer> {
    entries.sort_by_key(|entry| entry.amount);

    let mut transfers = Vec::new();
    if entries.is_empty() {
        return transfers;
    }

    let mut left = 0;
    let mut right = entries.len() - 1;

    while left < right {
        let amount = (-entries[left].amount).min(entries[right].amount);

        transfers.push(SettlementTransfer::new(
            entries[left].person.clone(),
            entries[right].person.clone(),
            amount,
        ));

        entries[left].amount += amount;
        entries[right].amount -= amount;

        if entries[left].amount == 0 {
            left += 1;
        }
        if entries[right].amount == 0 {
            right -= 1;
        }
    }

    transfers
}

/// Greedy settlement over a validated batch
pub(crate) fn run(transactions: &[Transaction]) -> Result<SettlementReport, SettlementError> {
    let balances = super::aggregate_checked(transactions)?;
    let transfers = match_entries(balances.non_zero_entries());

    Ok(SettlementReport::new(
        Algorithm::Greedy,
        transfers,
        transactions.len(),
    ))
}
