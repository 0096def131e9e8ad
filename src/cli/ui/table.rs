use colored::Color;

use crate::cli::output;

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Row data for a [`Table`].
#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub color: Option<Color>,
}

/// Simple table model used for rendering read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>, color: Option<Color>) {
        let row = TableRow {
            cells: cells.into_iter().map(|value| value.into()).collect(),
            color,
        };
        self.rows.push(row);
    }
}

/// Renders [`Table`] instances using simple padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn lines(table: &Table) -> Vec<String> {
        let mut lines = Vec::with_capacity(table.rows.len() + 2);
        if !table.columns.is_empty() {
            let cells: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
            let total_width = table.columns.iter().map(|col| col.width + 1).sum::<usize>();
            lines.push(Self::join(&table.columns, &cells));
            lines.push("─".repeat(total_width.saturating_sub(1).max(1)));
        }
        for row in &table.rows {
            let cells: Vec<&str> = row.cells.iter().map(String::as_str).collect();
            let line = Self::join(&table.columns, &cells);
            match row.color {
                Some(color) => lines.push(output::paint(line, color).to_string()),
                None => lines.push(line),
            }
        }
        lines
    }

    pub fn render(table: &Table) {
        for line in Self::lines(table) {
            output::line(line);
        }
    }

    fn join(columns: &[TableColumn], cells: &[&str]) -> String {
        let mut line = String::new();
        for (idx, column) in columns.iter().enumerate() {
            if idx > 0 {
                line.push(' ');
            }
            let cell = cells.get(idx).copied().unwrap_or("");
            line.push_str(&format!("{:width$}", truncate(cell, column.width), width = column.width));
        }
        line.trim_end().to_string()
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut shortened: String = value.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_padded_and_long_cells_truncated() {
        let mut table = Table::new(vec![TableColumn::new("Name", 6), TableColumn::new("Amount", 8)]);
        table.add_row(vec!["Lunch", "-$40.00"], None);
        table.add_row(vec!["Groceries", "-$5.00"], None);
        let lines = TableRenderer::lines(&table);
        assert_eq!(lines[0], "Name   Amount");
        assert_eq!(lines[2], "Lunch  -$40.00");
        assert_eq!(lines[3], "Groce… -$5.00");
    }
}
