//! Property tests over randomly generated closed transaction sets
//!
//! Whatever the input, aggregation must balance to zero and every
//! algorithm's transfer list must drive each balance to exactly zero.

use debt_settlement_core_rs::{run_all, Algorithm, NetBalances, SettlementTransfer, Transaction};
use proptest::prelude::*;
use std::collections::HashMap;

// ============================================================================
// Strategies
// ============================================================================

/// Random batches over a small participant pool, self-transfers excluded
fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (0usize..6, 0usize..6, 1i64..=50)
            .prop_filter("no self transfers", |(from, to, _)| from != to),
        1..40,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(from, to, amount)| {
                Transaction::new(format!("P{from}"), format!("P{to}"), amount)
            })
            .collect()
    })
}

fn leftover_after_applying(
    balances: &NetBalances,
    transfers: &[SettlementTransfer],
) -> HashMap<String, i64> {
    let mut remaining: HashMap<String, i64> = balances
        .iter()
        .map(|(person, amount)| (person.to_string(), amount))
        .collect();
    for transfer in transfers {
        *remaining.entry(transfer.from.clone()).or_insert(0) += transfer.amount;
        *remaining.entry(transfer.to.clone()).or_insert(0) -= transfer.amount;
    }
    remaining
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_balances_sum_to_zero(txs in transactions_strategy()) {
        prop_assert_eq!(NetBalances::aggregate(&txs).total(), 0);
    }

    #[test]
    fn prop_every_algorithm_zeroes_all_balances(txs in transactions_strategy()) {
        let balances = NetBalances::aggregate(&txs);
        let comparison = run_all(&txs).unwrap();
        prop_assert!(comparison.all_succeeded());

        for algorithm in Algorithm::ALL {
            let report = comparison.report(algorithm).unwrap();
            for transfer in &report.transfers {
                prop_assert!(transfer.amount > 0, "{:?} produced a non-positive transfer", algorithm);
            }
            let remaining = leftover_after_applying(&balances, &report.transfers);
            prop_assert!(
                remaining.values().all(|&amount| amount == 0),
                "{:?} left balances unsettled: {:?}",
                algorithm,
                remaining
            );
        }
    }

    #[test]
    fn prop_matchers_need_at_most_n_minus_one_transfers(txs in transactions_strategy()) {
        let non_zero = NetBalances::aggregate(&txs).non_zero_entries().len();
        let comparison = run_all(&txs).unwrap();

        // Holds for the balance matchers; the graph settler may split a
        // debtor across several paths and is not bounded this way
        for algorithm in [Algorithm::Greedy, Algorithm::Heap, Algorithm::UnionFind] {
            let report = comparison.report(algorithm).unwrap();
            prop_assert!(report.settlement_count <= non_zero.saturating_sub(1));
        }
    }

    #[test]
    fn prop_results_are_deterministic(txs in transactions_strategy()) {
        prop_assert_eq!(run_all(&txs).unwrap(), run_all(&txs).unwrap());
    }

    #[test]
    fn prop_component_count_matches_connectivity(txs in transactions_strategy()) {
        // Count components by brute-force flooding over the undirected
        // transaction graph and compare with the union-find report
        let balances = NetBalances::aggregate(&txs);
        let n = balances.len();
        let mut adjacent = vec![Vec::new(); n];
        for tx in &txs {
            let a = balances.index_of(tx.sender_id()).unwrap();
            let b = balances.index_of(tx.receiver_id()).unwrap();
            adjacent[a].push(b);
            adjacent[b].push(a);
        }

        let mut seen = vec![false; n];
        let mut components = 0usize;
        for start in 0..n {
            if seen[start] {
                continue;
            }
            components += 1;
            let mut stack = vec![start];
            while let Some(node) = stack.pop() {
                if seen[node] {
                    continue;
                }
                seen[node] = true;
                stack.extend(adjacent[node].iter().copied());
            }
        }

        let comparison = run_all(&txs).unwrap();
        let report = comparison.report(Algorithm::UnionFind).unwrap();
        prop_assert_eq!(report.component_count, Some(components));
    }
}
