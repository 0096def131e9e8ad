//! Threshold notices derived from how much of the budget has been spent.

use std::fmt;

pub const HALF_SPENT_PERCENT: f64 = 50.0;
pub const NEAR_LIMIT_PERCENT: f64 = 80.0;
pub const EXCEEDED_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Info,
    Warning,
}

/// The single most severe notice applicable to the current spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdAlert {
    #[default]
    None,
    /// At least half of the budget is gone.
    HalfSpent,
    /// At least 80% of the budget is gone.
    NearLimit,
    /// The budget is used up or overrun.
    Exceeded,
}

impl ThresholdAlert {
    /// Picks the alert for a percent-of-budget value. Thresholds are checked
    /// from the most severe down, so only one alert is ever produced. A
    /// missing percentage (no budget ceiling) never alerts.
    pub fn from_percent(percent_spent: Option<f64>) -> Self {
        let Some(percent) = percent_spent else {
            return ThresholdAlert::None;
        };
        if percent >= EXCEEDED_PERCENT {
            ThresholdAlert::Exceeded
        } else if percent >= NEAR_LIMIT_PERCENT {
            ThresholdAlert::NearLimit
        } else if percent >= HALF_SPENT_PERCENT {
            ThresholdAlert::HalfSpent
        } else {
            ThresholdAlert::None
        }
    }

    pub fn is_none(self) -> bool {
        self == ThresholdAlert::None
    }

    pub fn severity(self) -> Option<AlertSeverity> {
        match self {
            ThresholdAlert::None => None,
            ThresholdAlert::HalfSpent => Some(AlertSeverity::Info),
            ThresholdAlert::NearLimit | ThresholdAlert::Exceeded => Some(AlertSeverity::Warning),
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            ThresholdAlert::None => None,
            ThresholdAlert::HalfSpent => Some("You've spent 50% of your budget."),
            ThresholdAlert::NearLimit => Some("You have spent 80% of your budget!"),
            ThresholdAlert::Exceeded => Some("You have exceeded your budget!"),
        }
    }
}

impl fmt::Display for ThresholdAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("Spending is within budget."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_severe_threshold_wins() {
        assert_eq!(ThresholdAlert::from_percent(Some(100.0)), ThresholdAlert::Exceeded);
        assert_eq!(ThresholdAlert::from_percent(Some(250.0)), ThresholdAlert::Exceeded);
        assert_eq!(ThresholdAlert::from_percent(Some(80.0)), ThresholdAlert::NearLimit);
        assert_eq!(ThresholdAlert::from_percent(Some(99.9)), ThresholdAlert::NearLimit);
        assert_eq!(ThresholdAlert::from_percent(Some(50.0)), ThresholdAlert::HalfSpent);
        assert_eq!(ThresholdAlert::from_percent(Some(49.0)), ThresholdAlert::None);
        assert_eq!(ThresholdAlert::from_percent(Some(-20.0)), ThresholdAlert::None);
    }

    #[test]
    fn missing_percent_is_silent() {
        let alert = ThresholdAlert::from_percent(None);
        assert!(alert.is_none());
        assert_eq!(alert.severity(), None);
        assert_eq!(alert.message(), None);
    }

    #[test]
    fn severities_follow_thresholds() {
        assert_eq!(ThresholdAlert::HalfSpent.severity(), Some(AlertSeverity::Info));
        assert_eq!(ThresholdAlert::NearLimit.severity(), Some(AlertSeverity::Warning));
        assert_eq!(ThresholdAlert::Exceeded.severity(), Some(AlertSeverity::Warning));
    }
}
