//! Union-find component partitioner
//!
//! Participants connected by at least one transaction form a component; no
//! transfer ever needs to cross components, since no debt relation links
//! them. The partitioner unions the endpoints of every transaction in a
//! disjoint-set forest, groups participants by representative, and settles
//! each component independently with the greedy matching pass.
//!
//! The forest is arena-style: participants are the dense indices from
//! aggregation, parent and rank live in flat arrays. Path-halving find
//! plus union-by-rank give near O(1) amortized operations.
//!
//! Complexity: O(n a(n)) partitioning + O(k log k) per component of size k.

use crate::models::balance::BalanceEntry;
use crate::models::report::{Algorithm, SettlementReport};
use crate::models::transaction::Transaction;
use crate::settlement::{greedy, SettlementError};
use std::collections::HashMap;

/// Disjoint-set forest over dense participant indices
///
/// # Determinism
///
/// When two roots have equal rank, the lower index becomes the new root.
/// Unions happen in transaction order, so representatives are fixed for a
/// given input list.
#[derive(Debug, Clone)]
pub(crate) struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSetForest {
    /// Create `n` singleton sets
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of the set containing `x`
    ///
    /// Iterative path-halving: each visited node is pointed at its
    /// grandparent, flattening the path without a second pass.
    pub(crate) fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets containing `a` and `b` (union by rank)
    pub(crate) fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                let (low, high) = if root_a < root_b {
                    (root_a, root_b)
                } else {
                    (root_b, root_a)
                };
                self.parent[high] = low;
                self.rank[low] += 1;
            }
        }
    }
}

/// Component settlement over a validated batch
pub(crate) fn run(transactions: &[Transaction]) -> Result<SettlementReport, SettlementError> {
    let balances = super::aggregate_checked(transactions)?;

    let mut forest = DisjointSetForest::new(balances.len());
    for tx in transactions {
        if let (Some(a), Some(b)) = (
            balances.index_of(tx.sender_id()),
            balances.index_of(tx.receiver_id()),
        ) {
            forest.union(a, b);
        }
    }

    // Group participants by representative, components ordered by their
    // first-seen member
    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    for idx in 0..balances.len() {
        let root = forest.find(idx);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(idx);
    }
    let component_count = components.len();

    // Each component settles independently with the greedy matching pass
    let mut transfers = Vec::new();
    for members in components {
        let entries: Vec<BalanceEntry> = members
            .into_iter()
            .filter(|&idx| balances.amount(idx) != 0)
            .map(|idx| BalanceEntry {
                person: balances.person(idx).to_string(),
                amount: balances.amount(idx),
                order: idx,
            })
            .collect();

        transfers.extend(greedy::match_entries(entries));
    }

    Ok(SettlementReport::new(Algorithm::UnionFind, transfers, transactions.len())
        .with_component_count(component_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut forest = DisjointSetForest::new(3);
        assert_eq!(forest.find(0), 0);
        assert_eq!(forest.find(2), 2);
    }

    #[test]
    fn test_union_merges_sets() {
        let mut forest = DisjointSetForest::new(4);
        forest.union(0, 1);
        forest.union(2, 3);
        assert_eq!(forest.find(0), forest.find(1));
        assert_eq!(forest.find(2), forest.find(3));
        assert_ne!(forest.find(0), forest.find(2));

        forest.union(1, 3);
        assert_eq!(forest.find(0), forest.find(2));
    }

    #[test]
    fn test_equal_rank_prefers_lower_index() {
        let mut forest = DisjointSetForest::new(2);
        forest.union(1, 0);
        assert_eq!(forest.find(1), 0);
    }

    #[test]
    fn test_path_halving_flattens() {
        let mut forest = DisjointSetForest::new(4);
        forest.union(0, 1);
        forest.union(0, 2);
        forest.union(0, 3);
        let root = forest.find(3);
        assert_eq!(forest.parent[3], root);
    }
}
