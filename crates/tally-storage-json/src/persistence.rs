use serde_json::Error as JsonError;
use tally_core::{KeyValueStore, StorageError, BUDGET_KEY, TRANSACTIONS_KEY};
use tally_domain::{Budget, Ledger, Transaction};
use tracing::{debug, warn};

/// Tolerance used when comparing the persisted `spent` with the transactions.
const DRIFT_EPSILON: f64 = 1e-9;

/// Outcome of a forgiving load: the ledger in use plus everything that had
/// to be papered over to produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub ledger: Ledger,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Mirrors a ledger into the `budget` and `transactions` slots of a
/// key-value backend.
pub struct LedgerPersistence<S> {
    store: S,
}

impl<S: KeyValueStore> LedgerPersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&self, ledger: &Ledger) -> Result<(), StorageError> {
        let budget = serde_json::to_string(&ledger.budget).map_err(serde_error)?;
        let transactions = serde_json::to_string(&ledger.transactions).map_err(serde_error)?;
        self.store
            .set_all(&[
                (BUDGET_KEY, budget.as_str()),
                (TRANSACTIONS_KEY, transactions.as_str()),
            ])?;
        debug!(
            transactions = ledger.transactions.len(),
            "ledger persisted"
        );
        Ok(())
    }

    /// Never fails: each slot that is missing or unreadable is replaced by
    /// its default independently of the other.
    pub fn load(&self) -> Ledger {
        self.load_with_report().ledger
    }

    pub fn load_with_report(&self) -> LoadReport {
        let mut warnings = Vec::new();
        let budget: Budget = self.read_slot(BUDGET_KEY, &mut warnings).unwrap_or_default();
        let transactions: Vec<Transaction> = self
            .read_slot(TRANSACTIONS_KEY, &mut warnings)
            .unwrap_or_default();
        let ledger = Ledger::new(budget, transactions);

        // Drift is reported, never corrected.
        let net = ledger.transaction_net();
        if (ledger.budget.spent - net).abs() > DRIFT_EPSILON {
            let message = format!(
                "stored spent {:.2} does not match transactions total {:.2}",
                ledger.budget.spent, net
            );
            warn!("{message}");
            warnings.push(message);
        }

        LoadReport { ledger, warnings }
    }

    fn read_slot<T>(&self, key: &str, warnings: &mut Vec<String>) -> Option<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                debug!(key, "slot empty, using defaults");
                return None;
            }
            Err(err) => {
                let message = format!("could not read `{key}`: {err}; using defaults");
                warn!("{message}");
                warnings.push(message);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                let message = format!("could not decode `{key}`: {err}; using defaults");
                warn!("{message}");
                warnings.push(message);
                None
            }
        }
    }
}

fn serde_error(err: JsonError) -> StorageError {
    StorageError::Serde(err.to_string())
}
