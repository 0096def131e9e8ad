use std::sync::Arc;

use tally_domain::{Budget, BudgetPeriod, Ledger, Transaction, TransactionKind};
use tracing::{debug, info};

use crate::{
    alerts::ThresholdAlert,
    error::ValidationError,
    summary::{CategoryBreakdown, DashboardSnapshot},
    time::{Clock, DATE_FORMAT},
};

/// Owns the ledger and applies every command against it.
///
/// Commands validate first and mutate second, so a rejected command never
/// leaves a partial update behind.
pub struct LedgerStore {
    ledger: Ledger,
    clock: Arc<dyn Clock>,
    last_id: Option<u64>,
}

impl LedgerStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::from_ledger(Ledger::default(), clock)
    }

    /// Adopts a previously persisted ledger as-is.
    pub fn from_ledger(ledger: Ledger, clock: Arc<dyn Clock>) -> Self {
        let last_id = ledger.last_id();
        Self {
            ledger,
            clock,
            last_id,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    pub fn budget(&self) -> &Budget {
        &self.ledger.budget
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    /// Starts a new budget period. Prior transactions are discarded.
    pub fn set_budget(
        &mut self,
        amount: f64,
        period: BudgetPeriod,
    ) -> Result<&Budget, ValidationError> {
        if !is_positive_amount(amount) {
            debug!(amount, "rejected budget amount");
            return Err(ValidationError::InvalidBudgetAmount(amount));
        }
        let discarded = self.ledger.transactions.len();
        self.ledger.budget = Budget::new(amount, period);
        self.ledger.transactions.clear();
        info!(amount, %period, discarded, "budget set");
        Ok(&self.ledger.budget)
    }

    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&Transaction, ValidationError> {
        if !is_positive_amount(amount) {
            debug!(amount, %kind, "rejected transaction amount");
            return Err(ValidationError::InvalidTransactionAmount(amount));
        }
        let description = description.into();
        if description.trim().is_empty() {
            debug!(%kind, "rejected transaction without description");
            return Err(ValidationError::EmptyDescription);
        }

        let transaction = Transaction {
            id: self.next_id(),
            kind,
            amount,
            category: category.into(),
            description,
            date: self.clock.today().format(DATE_FORMAT).to_string(),
        };
        self.ledger.budget.spent += transaction.signed_amount();
        info!(
            id = transaction.id,
            %kind,
            amount,
            category = %transaction.category,
            spent = self.ledger.budget.spent,
            "transaction added"
        );

        let index = self.ledger.transactions.len();
        self.ledger.transactions.push(transaction);
        Ok(&self.ledger.transactions[index])
    }

    pub fn reset(&mut self) {
        let discarded = self.ledger.transactions.len();
        self.ledger = Ledger::default();
        info!(discarded, "ledger reset");
    }

    pub fn dashboard_snapshot(&self) -> DashboardSnapshot {
        let snapshot = DashboardSnapshot::from_budget(&self.ledger.budget);
        debug!(?snapshot, "dashboard snapshot");
        snapshot
    }

    pub fn category_breakdown(&self) -> CategoryBreakdown {
        let breakdown = CategoryBreakdown::from_ledger(&self.ledger);
        debug!(categories = breakdown.len(), "category breakdown");
        breakdown
    }

    pub fn threshold_alert(&self) -> ThresholdAlert {
        ThresholdAlert::from_percent(self.ledger.budget.percent_spent())
    }

    /// Millisecond timestamp from the clock, bumped past the last issued id
    /// whenever the clock stalls or runs backwards. Saturates at `u64::MAX`.
    fn next_id(&mut self) -> u64 {
        let now = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let id = match self.last_id {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last_id = Some(id);
        id
    }
}

fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}
