//! Table rendering for formatted output.

/// Column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A simple aligned table for terminal output.
///
/// Widths are computed over character counts, not bytes, so icon cells
/// ("✓", "✗") line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table with the given headers, all left-aligned.
    pub fn new(headers: Vec<&str>) -> Self {
        let aligns = vec![Align::Left; headers.len()];
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            aligns,
            rows: Vec::new(),
        }
    }

    /// Set the alignment of one column.
    pub fn align(mut self, column: usize, align: Align) -> Self {
        if let Some(slot) = self.aligns.get_mut(column) {
            *slot = align;
        }
        self
    }

    /// Add a row. Missing trailing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&self.render_cells(&self.headers, &widths));
        out.push('\n');
        out.push_str(&separator(&widths));

        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_cells(row, &widths));
        }

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(display_width(cell));
                }
            }
        }
        widths
    }

    fn render_cells(&self, cells: &[String], widths: &[usize]) -> String {
        let mut parts = Vec::with_capacity(widths.len());
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(|s| s.as_str()).unwrap_or("");
            let pad = width.saturating_sub(display_width(cell));
            let padded = match self.aligns[i] {
                Align::Left => format!("{}{}", cell, " ".repeat(pad)),
                Align::Right => format!("{}{}", " ".repeat(pad), cell),
            };
            parts.push(padded);
        }
        let line = parts.join("  ");
        line.trim_end().to_string()
    }
}

fn separator(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("──")
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}
