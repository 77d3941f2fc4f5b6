//! Batch runner for the settlement engine
//!
//! Reads a JSON array of transactions from a file argument (or stdin when
//! no argument is given), runs all four algorithms, and prints the
//! combined result as JSON keyed by algorithm identifier:
//!
//! ```text
//! $ echo '[{"from": "A", "to": "B", "amount": 10}]' | debt-settlement-cli
//! {
//!   "algorithms": {
//!     "1": { "algorithm": "greedy", "transfers": [...], ... },
//!     ...
//!   }
//! }
//! ```
//!
//! A failed algorithm serializes as `{"error": "..."}` in its slot; a
//! batch that fails validation prints the error to stderr and exits
//! non-zero.

use debt_settlement_core_rs::{run_all, Transaction};
use std::io::Read;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1);

    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let transactions: Vec<Transaction> = serde_json::from_str(&raw)?;
    let comparison = run_all(&transactions)?;

    let mut algorithms = serde_json::Map::new();
    for (algorithm, outcome) in &comparison.outcomes {
        let value = match outcome {
            Ok(report) => serde_json::to_value(report)?,
            Err(err) => serde_json::json!({ "error": err.to_string() }),
        };
        algorithms.insert(algorithm.id().to_string(), value);
    }

    let output = serde_json::json!({ "algorithms": algorithms });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
