//! Twin-heap matcher
//!
//! Two priority heaps over the non-zero balances: debtors keyed so the
//! most negative balance pops first, creditors so the most positive pops
//! first. Pop both tops, transfer `min(-debtor, creditor)`, and reinsert
//! whichever side still carries a balance. The heaps empty together,
//! because the total balance is zero.
//!
//! Same extreme-matching outcome as the greedy sort for a one-shot batch;
//! the heaps earn their keep when balances arrive incrementally rather
//! than all at once, since each update is O(log n) instead of a re-sort.
//!
//! Priority keys are explicit `Ord` types (tie-break toward the lower
//! first-seen order) over `std::collections::BinaryHeap`, keeping pops
//! deterministic.
//!
//! Complexity: O(n log n).

use crate::models::report::{Algorithm, SettlementReport, SettlementTransfer};
use crate::models::transaction::Transaction;
use crate::settlement::SettlementError;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Debtor heap entry: the most negative balance pops first
#[derive(Debug, Clone, PartialEq, Eq)]
struct DebtorEntry {
    amount: i64,
    order: usize,
    person: String,
}

impl Ord for DebtorEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed amount for a min-heap on balance; lower first-seen
        // order wins ties
        other
            .amount
            .cmp(&self.amount)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for DebtorEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Creditor heap entry: the most positive balance pops first
#[derive(Debug, Clone, PartialEq, Eq)]
struct CreditorEntry {
    amount: i64,
    order: usize,
    person: String,
}

impl Ord for CreditorEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for CreditorEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Twin-heap settlement over a validated batch
pub(crate) fn run(transactions: &[Transaction]) -> Result<SettlementReport, SettlementError> {
    let balances = super::aggregate_checked(transactions)?;

    let mut debtors = BinaryHeap::new();
    let mut creditors = BinaryHeap::new();

    for entry in balances.non_zero_entries() {
        if entry.amount < 0 {
            debtors.push(DebtorEntry {
                amount: entry.amount,
                order: entry.order,
                person: entry.person,
            });
        } else {
            creditors.push(CreditorEntry {
                amount: entry.amount,
                order: entry.order,
                person: entry.person,
            });
        }
    }

    let mut transfers = Vec::new();

    while let Some(debtor) = debtors.pop() {
        let creditor = match creditors.pop() {
            Some(creditor) => creditor,
            // Total balance is zero, so a lone leftover debtor is a bug
            None => {
                return Err(SettlementError::UnsettledBalance {
                    person: debtor.person,
                    remaining: debtor.amount,
                })
            }
        };

        let amount = (-debtor.amount).min(creditor.amount);
        transfers.push(SettlementTransfer::new(
            debtor.person.clone(),
            creditor.person.clone(),
            amount,
        ));

        let debtor_left = debtor.amount + amount;
        let creditor_left = creditor.amount - amount;

        // Reinsert with the original order rank so ties stay stable
        if debtor_left < 0 {
            debtors.push(DebtorEntry {
                amount: debtor_left,
                order: debtor.order,
                person: debtor.person,
            });
        }
        if creditor_left > 0 {
            creditors.push(CreditorEntry {
                amount: creditor_left,
                order: creditor.order,
                person: creditor.person,
            });
        }
    }

    if let Some(creditor) = creditors.pop() {
        return Err(SettlementError::UnsettledBalance {
            person: creditor.person,
            remaining: creditor.amount,
        });
    }

    Ok(SettlementReport::new(
        Algorithm::Heap,
        transfers,
        transactions.len(),
    ))
}
