//! Text renderings of the ledger: dashboard, transaction list, analytics.

use colored::Color;
use tally_core::{AlertSeverity, CategoryBreakdown, DashboardSnapshot, ThresholdAlert};
use tally_domain::{BudgetPeriod, Transaction, TransactionKind};

use super::chart::{BarChart, DEFAULT_BAR_WIDTH};
use super::money::{format_money, format_signed_money};
use super::table::{Table, TableColumn, TableRenderer};
use crate::cli::output;

const PROGRESS_CELLS: usize = 20;

pub fn progress_bar(snapshot: &DashboardSnapshot) -> String {
    let progress = snapshot.progress();
    let filled = ((progress / 100.0) * PROGRESS_CELLS as f64).round() as usize;
    let filled = filled.min(PROGRESS_CELLS);
    let percent = match snapshot.percent_spent {
        Some(value) => format!("{value:.1}%"),
        None => "n/a".to_string(),
    };
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        ".".repeat(PROGRESS_CELLS - filled),
        percent
    )
}

pub fn dashboard_lines(
    snapshot: &DashboardSnapshot,
    period: BudgetPeriod,
    symbol: &str,
) -> Vec<String> {
    vec![
        format!("Budget:    {} ({period})", format_money(symbol, snapshot.amount)),
        format!("Spent:     {}", format_money(symbol, snapshot.spent)),
        format!("Remaining: {}", format_money(symbol, snapshot.remaining)),
        format!("Progress:  {}", progress_bar(snapshot)),
    ]
}

pub fn render_dashboard(
    snapshot: &DashboardSnapshot,
    period: BudgetPeriod,
    alert: ThresholdAlert,
    symbol: &str,
) {
    output::section("Dashboard");
    for line in dashboard_lines(snapshot, period, symbol) {
        output::line(line);
    }
    render_alert(alert);
}

pub fn render_alert(alert: ThresholdAlert) {
    let (Some(severity), Some(message)) = (alert.severity(), alert.message()) else {
        return;
    };
    match severity {
        AlertSeverity::Info => output::info(message),
        AlertSeverity::Warning => output::warning(message),
    }
}

pub fn transaction_table(transactions: &[Transaction], symbol: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::new("Description", 24),
        TableColumn::new("Details", 28),
        TableColumn::new("Amount", 12),
    ]);
    for txn in transactions {
        let color = match txn.kind {
            TransactionKind::Expense => Color::Red,
            TransactionKind::Income => Color::Green,
        };
        table.add_row(
            vec![
                txn.description.clone(),
                format!("{} • {}", txn.category, txn.date),
                format_signed_money(symbol, txn.kind, txn.amount),
            ],
            Some(color),
        );
    }
    table
}

pub fn render_transactions(transactions: &[Transaction], symbol: &str) {
    output::section("Transactions");
    if transactions.is_empty() {
        output::info("No transactions recorded yet.");
        return;
    }
    TableRenderer::render(&transaction_table(transactions, symbol));
}

pub fn breakdown_table(breakdown: &CategoryBreakdown, symbol: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::new("Category", 20),
        TableColumn::new("Total", 12),
        TableColumn::new("Share", 10),
    ]);
    for share in breakdown.entries() {
        table.add_row(
            vec![
                share.category.clone(),
                format_money(symbol, share.total),
                format!("{:.1}%", share.percent_of_spent),
            ],
            None,
        );
    }
    table
}

pub fn render_analytics(breakdown: &CategoryBreakdown, symbol: &str) {
    output::section("Analytics");
    if breakdown.is_empty() {
        output::info("No expenses to analyse yet.");
    } else {
        TableRenderer::render(&breakdown_table(breakdown, symbol));
    }
    output::line("");
    let chart = BarChart::new(breakdown.chart_series(), symbol);
    for line in chart.render(DEFAULT_BAR_WIDTH) {
        output::line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(amount: f64, spent: f64) -> DashboardSnapshot {
        DashboardSnapshot {
            amount,
            spent,
            remaining: amount - spent,
            percent_spent: (amount != 0.0).then(|| spent / amount * 100.0),
        }
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(&snapshot(100.0, 30.0)), "[######..............] 30.0%");
    }

    #[test]
    fn progress_bar_clamps_overspend_and_reports_real_percent() {
        assert_eq!(progress_bar(&snapshot(100.0, 150.0)), "[####################] 150.0%");
        assert_eq!(progress_bar(&snapshot(100.0, -20.0)), "[....................] -20.0%");
    }

    #[test]
    fn progress_bar_without_budget_is_not_applicable() {
        assert_eq!(progress_bar(&snapshot(0.0, 0.0)), "[....................] n/a");
    }

    #[test]
    fn dashboard_lists_totals_with_period() {
        let lines = dashboard_lines(&snapshot(100.0, 30.0), BudgetPeriod::Monthly, "$");
        assert_eq!(lines[0], "Budget:    $100.00 (monthly)");
        assert_eq!(lines[1], "Spent:     $30.00");
        assert_eq!(lines[2], "Remaining: $70.00");
    }
}
