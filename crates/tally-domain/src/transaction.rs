//! Domain model for recorded income and expense entries.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }

    /// Sign applied to an amount when folding it into `Budget::spent`.
    pub fn spend_sign(self) -> f64 {
        match self {
            TransactionKind::Expense => 1.0,
            TransactionKind::Income => -1.0,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(TransactionKind::Expense),
            "income" => Ok(TransactionKind::Income),
            other => Err(format!("unknown transaction type `{other}`")),
        }
    }
}

/// A single ledger entry. Amounts are always positive; `kind` carries the sign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Creation time in epoch milliseconds, strictly increasing within a ledger.
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    /// Local creation date, already formatted for display.
    pub date: String,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Contribution of this entry to `Budget::spent`.
    pub fn signed_amount(&self) -> f64 {
        self.kind.spend_sign() * self.amount
    }
}
