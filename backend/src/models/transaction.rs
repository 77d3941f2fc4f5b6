//! Transaction model
//!
//! Represents a single original IOU between two participants:
//! - Sender (the person who owes) and receiver (the person owed)
//! - Amount (i64, smallest currency unit) - always positive for a valid record
//!
//! A transaction is immutable once constructed. Construction never panics;
//! validity is checked separately via [`Transaction::validate`] so that the
//! engine can reject a whole batch with a precise error before any
//! algorithm runs.
//!
//! CRITICAL: All money values are i64

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors describing an invalid transaction record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("participant identifier is empty")]
    MissingParticipant,

    #[error("sender and receiver are the same participant")]
    SelfTransfer,

    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount { amount: i64 },
}

fn new_transaction_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Represents a single debt record between two participants
///
/// # Example
/// ```
/// use debt_settlement_core_rs::Transaction;
///
/// let tx = Transaction::new("Rahul".to_string(), "Priya".to_string(), 50);
/// assert!(tx.validate().is_ok());
/// assert_eq!(tx.amount(), 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier (UUID)
    #[serde(default = "new_transaction_id")]
    id: String,

    /// Sender participant ID (owes this amount)
    #[serde(rename = "from")]
    sender_id: String,

    /// Receiver participant ID (is owed this amount)
    #[serde(rename = "to")]
    receiver_id: String,

    /// Transaction amount (i64, smallest currency unit)
    amount: i64,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// Does not validate: a transaction with an empty participant, a
    /// self-transfer, or a non-positive amount can be constructed but will
    /// be rejected by batch validation before any algorithm runs.
    ///
    /// # Example
    /// ```
    /// use debt_settlement_core_rs::Transaction;
    ///
    /// let tx = Transaction::new("A".to_string(), "B".to_string(), 100);
    /// assert_eq!(tx.sender_id(), "A");
    /// assert_eq!(tx.receiver_id(), "B");
    /// ```
    pub fn new(sender_id: String, receiver_id: String, amount: i64) -> Self {
        Self {
            id: new_transaction_id(),
            sender_id,
            receiver_id,
            amount,
        }
    }

    /// Check that this record is a well-formed debt
    ///
    /// Requirements:
    /// - both participant IDs non-empty
    /// - sender != receiver (exact, case-sensitive string equality)
    /// - amount strictly positive
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.sender_id.is_empty() || self.receiver_id.is_empty() {
            return Err(TransactionError::MissingParticipant);
        }
        if self.sender_id == self.receiver_id {
            return Err(TransactionError::SelfTransfer);
        }
        if self.amount <= 0 {
            return Err(TransactionError::NonPositiveAmount {
                amount: self.amount,
            });
        }
        Ok(())
    }

    /// Get transaction ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get sender participant ID
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    /// Get receiver participant ID
    pub fn receiver_id(&self) -> &str {
        &self.receiver_id
    }

    /// Get transaction amount
    pub fn amount(&self) -> i64 {
        self.amount
    }
}
