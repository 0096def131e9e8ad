use std::io;

use thiserror::Error;

/// Rejection of a ledger command. The ledger is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid budget amount (got {0}).")]
    InvalidBudgetAmount(f64),
    #[error("Transaction amount must be a positive number (got {0}).")]
    InvalidTransactionAmount(f64),
    #[error("Transaction description cannot be empty.")]
    EmptyDescription,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}
