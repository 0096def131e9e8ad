use serde::{Deserialize, Serialize};

use crate::{budget::Budget, transaction::Transaction};

/// Lifecycle of a ledger: freshly reset, or running against a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    Empty,
    Active,
}

/// The current budget together with the transactions recorded against it,
/// oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    pub budget: Budget,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(budget: Budget, transactions: Vec<Transaction>) -> Self {
        Self {
            budget,
            transactions,
        }
    }

    pub fn state(&self) -> LedgerState {
        if self.budget.amount == 0.0 && self.transactions.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::Active
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Highest id present, used to keep freshly issued ids increasing.
    pub fn last_id(&self) -> Option<u64> {
        self.transactions.iter().map(|txn| txn.id).max()
    }

    /// Signed sum of every recorded transaction (expenses positive).
    pub fn transaction_net(&self) -> f64 {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }
}
