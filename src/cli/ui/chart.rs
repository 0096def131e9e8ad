use tally_core::ChartSeries;

use super::money::format_money;

const BAR_GLYPH: char = '█';
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// Horizontal text bar chart built from a category series.
///
/// A chart is a throwaway value: callers build a fresh one for every render
/// so no state survives between invocations.
#[derive(Debug, Clone)]
pub struct BarChart {
    series: ChartSeries,
    currency_symbol: String,
}

impl BarChart {
    pub fn new(series: ChartSeries, currency_symbol: impl Into<String>) -> Self {
        Self {
            series,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Renders the title followed by one line per category. Bars scale to the
    /// largest positive value; a chart with no data renders a placeholder.
    pub fn render(&self, width: usize) -> Vec<String> {
        let mut lines = vec![self.series.label.to_string()];
        if self.series.is_empty() {
            lines.push("(no expenses yet)".into());
            return lines;
        }

        let label_width = self
            .series
            .labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        let max = self.series.max_value();

        for (label, value) in self.series.labels.iter().zip(&self.series.values) {
            let cells = bar_cells(*value, max, width);
            lines.push(format!(
                "{label:<label_width$} │{bar:<width$} {amount}",
                bar = BAR_GLYPH.to_string().repeat(cells),
                amount = format_money(&self.currency_symbol, *value),
            ));
        }
        lines
    }
}

fn bar_cells(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round().clamp(0.0, width as f64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(labels: &[&str], values: &[f64]) -> ChartSeries {
        ChartSeries {
            label: "Expenses by Category",
            labels: labels.iter().map(|s| s.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn bars_scale_to_the_largest_category() {
        let chart = BarChart::new(series(&["Food", "Rent"], &[40.0, 10.0]), "$");
        let lines = chart.render(8);
        assert_eq!(lines[0], "Expenses by Category");
        assert_eq!(lines[1], "Food │████████ $40.00");
        assert_eq!(lines[2], "Rent │██       $10.00");
    }

    #[test]
    fn empty_series_renders_placeholder() {
        let chart = BarChart::new(series(&[], &[]), "$");
        assert_eq!(chart.render(10), vec!["Expenses by Category", "(no expenses yet)"]);
    }

    #[test]
    fn rebuilding_gives_identical_output() {
        let data = series(&["Food"], &[12.5]);
        let first = BarChart::new(data.clone(), "$").render(DEFAULT_BAR_WIDTH);
        let second = BarChart::new(data, "$").render(DEFAULT_BAR_WIDTH);
        assert_eq!(first, second);
    }
}
