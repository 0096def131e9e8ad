//! Budget ceiling and the cadence label attached to it.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Enumerates the budgeting cadences a user can pick.
///
/// A period is a label only; nothing rolls over when it elapses.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePeriodError(pub String);

impl fmt::Display for ParsePeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown budget period `{}` (expected weekly, monthly, or yearly)",
            self.0
        )
    }
}

impl std::error::Error for ParsePeriodError {}

impl FromStr for BudgetPeriod {
    type Err = ParsePeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" => Ok(BudgetPeriod::Weekly),
            "monthly" | "month" => Ok(BudgetPeriod::Monthly),
            "yearly" | "year" | "annual" => Ok(BudgetPeriod::Yearly),
            _ => Err(ParsePeriodError(value.to_string())),
        }
    }
}

/// The spending ceiling for the current period and the running net spend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub amount: f64,
    pub period: BudgetPeriod,
    /// Expenses minus incomes recorded since the budget was last set.
    pub spent: f64,
}

impl Budget {
    pub fn new(amount: f64, period: BudgetPeriod) -> Self {
        Self {
            amount,
            period,
            spent: 0.0,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.amount - self.spent
    }

    /// Percent of the ceiling consumed, or `None` when no ceiling is set.
    pub fn percent_spent(&self) -> Option<f64> {
        if self.amount == 0.0 {
            None
        } else {
            Some(self.spent / self.amount * 100.0)
        }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(0.0, BudgetPeriod::default())
    }
}
