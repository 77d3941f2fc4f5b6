//! Settlement results
//!
//! A [`SettlementReport`] is the shared result shape every algorithm
//! produces: the ordered transfers plus metadata (counts, complexity
//! labels, optional component count). Reports are built once per
//! invocation and never mutated afterwards.
//!
//! A [`SettlementTransfer`] is a *computed* payment toward zeroing the net
//! balances; it need not correspond to any original transaction.

use serde::{Deserialize, Serialize};

/// The four settlement algorithms, numbered 1-4 like the external API
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Sort balances, match extremes with two cursors
    Greedy,

    /// Walk existing debt edges via DFS, settle along discovered paths
    GraphDfs,

    /// Partition into connected components, settle each greedily
    UnionFind,

    /// Twin priority heaps over debtors and creditors
    Heap,
}

impl Algorithm {
    /// All algorithms in identifier order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Greedy,
        Algorithm::GraphDfs,
        Algorithm::UnionFind,
        Algorithm::Heap,
    ];

    /// Numeric identifier (1-4), as used by the external API
    pub fn id(self) -> u8 {
        match self {
            Algorithm::Greedy => 1,
            Algorithm::GraphDfs => 2,
            Algorithm::UnionFind => 3,
            Algorithm::Heap => 4,
        }
    }

    /// Look up an algorithm by its numeric identifier
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Algorithm::Greedy),
            2 => Some(Algorithm::GraphDfs),
            3 => Some(Algorithm::UnionFind),
            4 => Some(Algorithm::Heap),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Greedy => "Greedy Two-Pointer (Sorted Balances)",
            Algorithm::GraphDfs => "Graph DFS Traversal (Adjacency List)",
            Algorithm::UnionFind => "Union-Find (Disjoint Sets)",
            Algorithm::Heap => "Twin Heaps (Priority Queues)",
        }
    }

    /// Time complexity class label
    pub fn time_complexity(self) -> &'static str {
        match self {
            Algorithm::Greedy => "O(n log n)",
            Algorithm::GraphDfs => "O(n * (V + E))",
            Algorithm::UnionFind => "O(n a(n) + k log k)",
            Algorithm::Heap => "O(n log n)",
        }
    }

    /// Space complexity class label
    pub fn space_complexity(self) -> &'static str {
        match self {
            Algorithm::Greedy => "O(n)",
            Algorithm::GraphDfs => "O(V + E)",
            Algorithm::UnionFind => "O(n)",
            Algorithm::Heap => "O(n)",
        }
    }

    /// Backing data structures label
    pub fn data_structures(self) -> &'static str {
        match self {
            Algorithm::Greedy => "hash map, sorted vector, two pointers",
            Algorithm::GraphDfs => "adjacency list, hash map, DFS recursion",
            Algorithm::UnionFind => "parent + rank arrays, hash map",
            Algorithm::Heap => "binary min-heap + max-heap, hash map",
        }
    }
}

/// A computed payment that reduces outstanding net balances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTransfer {
    /// Paying participant
    pub from: String,

    /// Receiving participant
    pub to: String,

    /// Transfer amount (always positive)
    pub amount: i64,
}

impl SettlementTransfer {
    /// Create a new transfer
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Result of one algorithm invocation
///
/// # Example
/// ```
/// use debt_settlement_core_rs::{settle, Algorithm, Transaction};
///
/// let txs = vec![Transaction::new("A".to_string(), "B".to_string(), 10)];
/// let report = settle(Algorithm::Greedy, &txs).unwrap();
///
/// assert_eq!(report.settlement_count, 1);
/// assert_eq!(report.original_transaction_count, 1);
/// assert_eq!(report.time_complexity, "O(n log n)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementReport {
    /// Algorithm that produced this report
    pub algorithm: Algorithm,

    /// Ordered settlement transfers
    pub transfers: Vec<SettlementTransfer>,

    /// Number of transactions in the input batch
    pub original_transaction_count: usize,

    /// Number of transfers produced (== transfers.len())
    pub settlement_count: usize,

    /// Number of connected components (union-find algorithm only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_count: Option<usize>,

    /// Time complexity class label
    pub time_complexity: &'static str,

    /// Space complexity class label
    pub space_complexity: &'static str,

    /// Backing data structures label
    pub data_structures: &'static str,
}

impl SettlementReport {
    /// Build a report from an algorithm's transfer list
    pub fn new(
        algorithm: Algorithm,
        transfers: Vec<SettlementTransfer>,
        original_transaction_count: usize,
    ) -> Self {
        let settlement_count = transfers.len();
        Self {
            algorithm,
            transfers,
            original_transaction_count,
            settlement_count,
            component_count: None,
            time_complexity: algorithm.time_complexity(),
            space_complexity: algorithm.space_complexity(),
            data_structures: algorithm.data_structures(),
        }
    }

    /// Attach a component count (builder pattern)
    pub fn with_component_count(mut self, component_count: usize) -> Self {
        self.component_count = Some(component_count);
        self
    }
}
