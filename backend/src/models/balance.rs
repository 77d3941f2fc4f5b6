//! Net balance aggregation
//!
//! Reduces a transaction list to one signed net balance per participant:
//! each transaction subtracts its amount from the sender and adds it to the
//! receiver. Negative = net debtor, positive = net creditor, zero = already
//! settled.
//!
//! Participants are interned to dense indices in first-seen order
//! (ID → index table plus an inverse vector), with amounts in a flat array.
//! The dense indices double as the arena for the disjoint-set forest, and
//! the first-seen order is the tie-break every algorithm uses, so one
//! aggregation pass fixes the determinism of the whole engine.
//!
//! # Invariants
//!
//! - Balances of a closed transaction set sum to exactly zero
//! - Indices are assigned in first-seen order and never change
//! - Derived data: recomputed per call, never persisted

use crate::models::transaction::Transaction;
use std::collections::HashMap;

/// A participant's non-zero net balance, tagged with its interning order
///
/// `order` is the participant's dense index from aggregation; it is the
/// tie-break key that keeps sorts and heap pops deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceEntry {
    /// Participant ID
    pub person: String,

    /// Signed net balance (negative = owes, positive = is owed)
    pub amount: i64,

    /// First-seen interning order from aggregation
    pub order: usize,
}

/// Net balances per participant, interned to dense indices
///
/// # Example
/// ```
/// use debt_settlement_core_rs::{NetBalances, Transaction};
///
/// let txs = vec![
///     Transaction::new("A".to_string(), "B".to_string(), 10),
///     Transaction::new("B".to_string(), "C".to_string(), 4),
/// ];
/// let balances = NetBalances::aggregate(&txs);
///
/// assert_eq!(balances.amount_of("A"), -10);
/// assert_eq!(balances.amount_of("B"), 6);
/// assert_eq!(balances.amount_of("C"), 4);
/// assert_eq!(balances.total(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetBalances {
    /// Index → participant ID (first-seen order)
    ids: Vec<String>,

    /// Index → signed net balance
    amounts: Vec<i64>,

    /// Participant ID → index
    index: HashMap<String, usize>,
}

impl NetBalances {
    /// Create an empty balance table
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            amounts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Aggregate a transaction list into net balances
    ///
    /// O(n) in the number of transactions. Unseen participants are interned
    /// at zero; the sender is interned before the receiver.
    pub fn aggregate(transactions: &[Transaction]) -> Self {
        let mut balances = Self::new();

        for tx in transactions {
            let sender = balances.intern(tx.sender_id());
            let receiver = balances.intern(tx.receiver_id());

            balances.amounts[sender] -= tx.amount();
            balances.amounts[receiver] += tx.amount();
        }

        balances
    }

    /// Intern a participant ID, returning its dense index
    pub fn intern(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.ids.len();
        self.ids.push(id.to_string());
        self.amounts.push(0);
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Number of participants
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if no participant was seen
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Participant ID at a dense index
    ///
    /// # Panics
    /// Panics if `idx` is out of range.
    pub fn person(&self, idx: usize) -> &str {
        &self.ids[idx]
    }

    /// Dense index of a participant ID
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Net balance at a dense index
    ///
    /// # Panics
    /// Panics if `idx` is out of range.
    pub fn amount(&self, idx: usize) -> i64 {
        self.amounts[idx]
    }

    /// Mutable net balance at a dense index
    pub(crate) fn amount_mut(&mut self, idx: usize) -> &mut i64 {
        &mut self.amounts[idx]
    }

    /// Net balance of a participant ID (zero if unseen)
    pub fn amount_of(&self, id: &str) -> i64 {
        self.index_of(id).map_or(0, |idx| self.amounts[idx])
    }

    /// Sum of all balances (exactly zero for a closed transaction set)
    pub fn total(&self) -> i64 {
        self.amounts.iter().sum()
    }

    /// True if every balance is exactly zero
    pub fn is_settled(&self) -> bool {
        self.amounts.iter().all(|&amount| amount == 0)
    }

    /// Iterate `(id, balance)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.ids
            .iter()
            .zip(self.amounts.iter())
            .map(|(id, &amount)| (id.as_str(), amount))
    }

    /// Non-zero balances in first-seen order
    ///
    /// Zero balances are dropped up front: an already-settled participant
    /// never appears in a transfer.
    pub fn non_zero_entries(&self) -> Vec<BalanceEntry> {
        self.iter()
            .enumerate()
            .filter(|&(_, (_, amount))| amount != 0)
            .map(|(order, (person, amount))| BalanceEntry {
                person: person.to_string(),
                amount,
                order,
            })
            .collect()
    }
}

impl Default for NetBalances {
    fn default() -> Self {
        Self::new()
    }
}
