//! Tests for the engine surface: validation, dispatch, and the parallel
//! run-all comparison

use debt_settlement_core_rs::{
    run_all, settle, validate, Algorithm, NetBalances, SettlementError, Transaction,
    TransactionError,
};
use std::collections::HashMap;

// ============================================================================
// Test Helpers
// ============================================================================

fn tx(from: &str, to: &str, amount: i64) -> Transaction {
    Transaction::new(from.to_string(), to.to_string(), amount)
}

fn scenario_transactions() -> Vec<Transaction> {
    vec![
        tx("Rahul", "Priya", 50),
        tx("Priya", "Amit", 30),
        tx("Amit", "Neha", 25),
        tx("Neha", "Rahul", 15),
        tx("Rahul", "Amit", 20),
    ]
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_empty_batch_rejected() {
    assert_eq!(validate(&[]), Err(SettlementError::EmptyInput));
    assert_eq!(run_all(&[]).unwrap_err(), SettlementError::EmptyInput);
}

#[test]
fn test_self_transfer_rejects_whole_batch() {
    let txs = vec![tx("A", "B", 10), tx("C", "C", 5), tx("B", "A", 3)];

    for algorithm in Algorithm::ALL {
        assert_eq!(
            settle(algorithm, &txs),
            Err(SettlementError::InvalidTransaction {
                index: 1,
                source: TransactionError::SelfTransfer,
            })
        );
    }
}

#[test]
fn test_non_positive_amount_rejected() {
    let txs = vec![tx("A", "B", 0)];
    assert_eq!(
        validate(&txs),
        Err(SettlementError::InvalidTransaction {
            index: 0,
            source: TransactionError::NonPositiveAmount { amount: 0 },
        })
    );
}

#[test]
fn test_missing_identifier_rejected() {
    let txs = vec![tx("", "B", 10)];
    assert_eq!(
        validate(&txs),
        Err(SettlementError::InvalidTransaction {
            index: 0,
            source: TransactionError::MissingParticipant,
        })
    );
}

// ============================================================================
// Run-All Tests
// ============================================================================

#[test]
fn test_run_all_produces_four_outcomes() {
    let comparison = run_all(&scenario_transactions()).unwrap();

    assert_eq!(comparison.outcomes.len(), 4);
    assert!(comparison.all_succeeded());
    for algorithm in Algorithm::ALL {
        let report = comparison.report(algorithm).expect("report present");
        assert_eq!(report.algorithm, algorithm);
        assert_eq!(report.original_transaction_count, 5);
    }
}

#[test]
fn test_run_all_outcomes_keyed_by_identifier_order() {
    let comparison = run_all(&scenario_transactions()).unwrap();
    let ids: Vec<u8> = comparison.outcomes.keys().map(|a| a.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_every_algorithm_zeroes_all_balances() {
    let txs = scenario_transactions();
    let balances = NetBalances::aggregate(&txs);
    let comparison = run_all(&txs).unwrap();

    for algorithm in Algorithm::ALL {
        let report = comparison.report(algorithm).expect("report present");
        let mut remaining: HashMap<&str, i64> = balances.iter().collect();
        for transfer in &report.transfers {
            *remaining.get_mut(transfer.from.as_str()).expect("known payer") += transfer.amount;
            *remaining.get_mut(transfer.to.as_str()).expect("known payee") -= transfer.amount;
        }
        assert!(
            remaining.values().all(|&amount| amount == 0),
            "{algorithm:?} left balances unsettled"
        );
    }
}

#[test]
fn test_all_zero_input_yields_empty_transfers_everywhere() {
    let txs = vec![tx("A", "B", 10), tx("B", "A", 10)];
    let comparison = run_all(&txs).unwrap();

    for algorithm in Algorithm::ALL {
        let report = comparison.report(algorithm).expect("report present");
        assert!(report.transfers.is_empty(), "{algorithm:?} emitted transfers");
    }
}

#[test]
fn test_run_all_is_deterministic() {
    let txs = scenario_transactions();
    let first = run_all(&txs).unwrap();
    let second = run_all(&txs).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_report_serializes_to_json() {
    let report = settle(Algorithm::UnionFind, &[tx("A", "B", 10), tx("C", "D", 5)]).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["algorithm"], "union_find");
    assert_eq!(value["settlement_count"], 2);
    assert_eq!(value["component_count"], 2);
    assert_eq!(value["transfers"][0]["from"], "A");
}

#[test]
fn test_component_count_omitted_when_absent() {
    let report = settle(Algorithm::Greedy, &[tx("A", "B", 10)]).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert!(value.get("component_count").is_none());
}

#[test]
fn test_transaction_deserializes_from_wire_shape() {
    let txs: Vec<Transaction> =
        serde_json::from_str(r#"[{"from": "A", "to": "B", "amount": 10}]"#).unwrap();

    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].sender_id(), "A");
    assert_eq!(txs[0].receiver_id(), "B");
    assert_eq!(txs[0].amount(), 10);
    assert!(!txs[0].id().is_empty(), "id is generated when absent");
}
