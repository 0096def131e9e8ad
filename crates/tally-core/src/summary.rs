use tally_domain::{Budget, Ledger};

/// Read-only view of the budget totals shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSnapshot {
    pub amount: f64,
    pub spent: f64,
    pub remaining: f64,
    /// `None` when the budget amount is zero.
    pub percent_spent: Option<f64>,
}

impl DashboardSnapshot {
    pub fn from_budget(budget: &Budget) -> Self {
        Self {
            amount: budget.amount,
            spent: budget.spent,
            remaining: budget.remaining(),
            percent_spent: budget.percent_spent(),
        }
    }

    /// Fill level for a progress bar, in percent.
    pub fn progress(&self) -> f64 {
        self.percent_spent
            .map(|percent| percent.clamp(0.0, 100.0))
            .unwrap_or(0.0)
    }
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// Share of the budget's net `spent`, which may exceed 100 or be negative
    /// once incomes are recorded.
    pub percent_of_spent: f64,
}

/// Labels and values handed to a chart renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Per-category expense totals, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    entries: Vec<CategoryShare>,
}

impl CategoryBreakdown {
    pub const CHART_LABEL: &'static str = "Expenses by Category";

    pub fn from_ledger(ledger: &Ledger) -> Self {
        let mut entries: Vec<CategoryShare> = Vec::new();
        for txn in ledger.transactions.iter().filter(|txn| txn.is_expense()) {
            match entries
                .iter_mut()
                .find(|entry| entry.category == txn.category)
            {
                Some(entry) => entry.total += txn.amount,
                None => entries.push(CategoryShare {
                    category: txn.category.clone(),
                    total: txn.amount,
                    percent_of_spent: 0.0,
                }),
            }
        }

        // A zero net spend divides by one instead.
        let spent = ledger.budget.spent;
        let denominator = if spent == 0.0 { 1.0 } else { spent };
        for entry in &mut entries {
            entry.percent_of_spent = entry.total / denominator * 100.0;
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryShare] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, category: &str) -> Option<&CategoryShare> {
        self.entries.iter().find(|entry| entry.category == category)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.total).sum()
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            label: Self::CHART_LABEL,
            labels: self.entries.iter().map(|e| e.category.clone()).collect(),
            values: self.entries.iter().map(|e| e.total).collect(),
        }
    }
}
