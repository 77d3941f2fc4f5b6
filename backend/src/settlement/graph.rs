//! Graph DFS settler
//!
//! Builds a directed debt graph straight from the transaction list - one
//! edge per transaction, parallel edges kept - and settles each debtor by
//! depth-first search: find any creditor reachable through edges with
//! positive remaining capacity, transfer the bottleneck of the discovered
//! path (clamped by both endpoint balances) from the debtor to that
//! creditor, and decrement every edge on the path. The search repeats from
//! the same debtor until its balance reaches zero.
//!
//! Net balances alone already determine a valid transfer; walking existing
//! debt edges is what distinguishes this algorithm. When a debtor has no
//! positive-capacity path to any creditor (the graph is disconnected for
//! that pair), it settles directly against creditors in first-seen order
//! even though no original edge exists.
//!
//! # Determinism
//!
//! - Debtors are scanned in first-seen order
//! - Edges are explored in transaction order
//! - A visited set per search prevents cycles
//!
//! Complexity: O(V + E) per search, O(n * (V + E)) overall.

use crate::models::balance::NetBalances;
use crate::models::report::{Algorithm, SettlementReport, SettlementTransfer};
use crate::models::transaction::Transaction;
use crate::settlement::SettlementError;

/// One directed debt edge with remaining settlement capacity
#[derive(Debug, Clone)]
struct DebtEdge {
    /// Dense index of the receiving participant
    to: usize,

    /// Capacity left on this edge
    remaining: i64,
}

/// Directed debt graph over dense participant indices
///
/// Mutated in place as paths are settled; scoped to a single call.
#[derive(Debug, Clone)]
pub(crate) struct DebtGraph {
    balances: NetBalances,

    /// Adjacency list: participant index -> outgoing edges in tx order
    edges: Vec<Vec<DebtEdge>>,
}

impl DebtGraph {
    /// Build the graph and net balances in one pass over the transactions
    pub(crate) fn build(transactions: &[Transaction]) -> Self {
        let mut balances = NetBalances::new();
        let mut edges: Vec<Vec<DebtEdge>> = Vec::new();

        for tx in transactions {
            let from = balances.intern(tx.sender_id());
            let to = balances.intern(tx.receiver_id());
            if edges.len() < balances.len() {
                edges.resize_with(balances.len(), Vec::new);
            }

            *balances.amount_mut(from) -= tx.amount();
            *balances.amount_mut(to) += tx.amount();

            edges[from].push(DebtEdge {
                to,
                remaining: tx.amount(),
            });
        }

        Self { balances, edges }
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.balances.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.iter().map(|out| out.len()).sum()
    }

    /// DFS from `from` for any creditor reachable over positive-capacity
    /// edges
    ///
    /// On success returns the creditor's index; `path` holds the taken
    /// edges as `(participant, edge index)` pairs in path order.
    fn find_path(
        &self,
        from: usize,
        visited: &mut [bool],
        path: &mut Vec<(usize, usize)>,
    ) -> Option<usize> {
        visited[from] = true;

        for edge_idx in 0..self.edges[from].len() {
            let edge = &self.edges[from][edge_idx];
            if edge.remaining <= 0 || visited[edge.to] {
                continue;
            }

            path.push((from, edge_idx));
            if self.balances.amount(edge.to) > 0 {
                return Some(edge.to);
            }
            if let Some(creditor) = self.find_path(edge.to, visited, path) {
                return Some(creditor);
            }
            path.pop();
        }

        None
    }

    /// First creditor in first-seen order, for the disconnected fallback
    fn first_creditor(&self) -> Option<usize> {
        (0..self.balances.len()).find(|&idx| self.balances.amount(idx) > 0)
    }

    /// Settle one debtor down to a zero balance
    fn settle_debtor(&mut self, debtor: usize, transfers: &mut Vec<SettlementTransfer>) {
        while self.balances.amount(debtor) < 0 {
            let mut visited = vec![false; self.balances.len()];
            let mut path = Vec::new();

            let (creditor, amount) = match self.find_path(debtor, &mut visited, &mut path) {
                Some(creditor) => {
                    let bottleneck = path
                        .iter()
                        .map(|&(person, edge_idx)| self.edges[person][edge_idx].remaining)
                        .fold(i64::MAX, i64::min);
                    let amount = bottleneck
                        .min(-self.balances.amount(debtor))
                        .min(self.balances.amount(creditor));

                    for &(person, edge_idx) in &path {
                        self.edges[person][edge_idx].remaining -= amount;
                    }

                    (creditor, amount)
                }
                None => {
                    // No capacity path to any creditor: settle directly off
                    // the net balances instead
                    let creditor = match self.first_creditor() {
                        Some(creditor) => creditor,
                        None => break, // post-check reports the leftover
                    };
                    let amount = (-self.balances.amount(debtor))
                        .min(self.balances.amount(creditor));
                    (creditor, amount)
                }
            };

            *self.balances.amount_mut(debtor) += amount;
            *self.balances.amount_mut(creditor) -= amount;
            record_transfer(transfers, debtor, creditor, amount, &self.balances);
        }
    }

    /// Settle every debtor, in first-seen order
    fn settle_all(&mut self, transfers: &mut Vec<SettlementTransfer>) {
        for debtor in 0..self.balances.len() {
            if self.balances.amount(debtor) < 0 {
                self.settle_debtor(debtor, transfers);
            }
        }
    }
}

/// Append a transfer, merging into the previous one when it continues the
/// same debtor -> creditor payment over another path
fn record_transfer(
    transfers: &mut Vec<SettlementTransfer>,
    debtor: usize,
    creditor: usize,
    amount: i64,
    balances: &NetBalances,
) {
    let from = balances.person(debtor);
    let to = balances.person(creditor);

    if let Some(last) = transfers.last_mut() {
        if last.from == from && last.to == to {
            last.amount += amount;
            return;
        }
    }
    transfers.push(SettlementTransfer::new(from, to, amount));
}

/// Graph DFS settlement over a validated batch
pub(crate) fn run(transactions: &[Transaction]) -> Result<SettlementReport, SettlementError> {
    // Aggregated separately for the zero-sum check; the graph keeps its
    // own working copy of the balances
    super::aggregate_checked(transactions)?;

    let mut debt_graph = DebtGraph::build(transactions);
    let mut transfers = Vec::new();
    debt_graph.settle_all(&mut transfers);

    // Every balance must be driven to exactly zero
    for (person, amount) in debt_graph.balances.iter() {
        if amount != 0 {
            return Err(SettlementError::UnsettledBalance {
                person: person.to_string(),
                remaining: amount,
            });
        }
    }

    Ok(SettlementReport::new(
        Algorithm::GraphDfs,
        transfers,
        transactions.len(),
    ))
}
