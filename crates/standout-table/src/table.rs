//! Table builder for borders, headers, and alignment.
//!
//! [`Table`] collects presentation settings and renders a whole grid in one
//! call. Column widths come from the data, so every render measures the grid
//! first and fails with a [`ShapeError`](crate::ShapeError) before producing
//! any output when the grid is not rectangular.
//!
//! # Example
//!
//! ```rust
//! use standout_table::{Align, BorderStyle, Table};
//!
//! let table = Table::new()
//!     .border(BorderStyle::Rounded)
//!     .align(Align::Right)
//!     .header(["Name", "Count"]);
//!
//! let data = vec![vec!["Alice", "42"], vec!["Bob", "7"]];
//! let output = table.render(&data).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "╭───────┬───────╮\n\
//!      │  Name │ Count │\n\
//!      ├───────┼───────┤\n\
//!      │ Alice │    42 │\n\
//!      │   Bob │     7 │\n\
//!      ╰───────┴───────╯\n"
//! );
//! ```

use std::fmt::Display;

use tracing::trace;

use crate::border::{border_line, BorderStyle, LineRole};
use crate::error::Result;
use crate::row::build_row_aligned;
use crate::traits::TabularRow;
use crate::types::{Align, TableOptions};
use crate::width::column_widths;

/// A box-drawn table with optional headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Column headers.
    headers: Option<Vec<String>>,
    /// Border style.
    border: BorderStyle,
    /// Cell alignment, headers included.
    align: Align,
    /// Whether to add separators between data rows.
    row_separator: bool,
}

impl Table {
    /// Create a table with light borders, left alignment and no headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from deserialized settings.
    pub fn from_options(options: &TableOptions) -> Self {
        Table {
            headers: None,
            border: options.border,
            align: options.align,
            row_separator: options.row_separator,
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set the cell alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the column headers.
    pub fn header<S: Into<String>, I: IntoIterator<Item = S>>(mut self, headers: I) -> Self {
        self.headers = Some(headers.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Enable row separators between data rows.
    pub fn row_separator(mut self, enable: bool) -> Self {
        self.row_separator = enable;
        self
    }

    /// Get the border style.
    pub fn get_border(&self) -> BorderStyle {
        self.border
    }

    /// Get the cell alignment.
    pub fn get_align(&self) -> Align {
        self.align
    }

    /// Get the column headers, if any.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// The settings of this table, without headers.
    pub fn options(&self) -> TableOptions {
        TableOptions {
            border: self.border,
            align: self.align,
            row_separator: self.row_separator,
        }
    }

    /// Generate the top border for the given column widths.
    pub fn top_border(&self, col_widths: &[usize]) -> String {
        border_line(self.border, LineRole::Top, col_widths)
    }

    /// Generate a horizontal separator for the given column widths.
    pub fn separator_row(&self, col_widths: &[usize]) -> String {
        border_line(self.border, LineRole::Middle, col_widths)
    }

    /// Generate the bottom border for the given column widths.
    pub fn bottom_border(&self, col_widths: &[usize]) -> String {
        border_line(self.border, LineRole::Bottom, col_widths)
    }

    /// Format one content row for the given column widths.
    pub fn row<T: Display>(&self, values: &[T], col_widths: &[usize]) -> String {
        build_row_aligned(values, col_widths, self.align, self.border)
    }

    /// Render the complete table.
    ///
    /// Includes top border, header and separator (if headers are set), data
    /// rows with optional separators between them, and bottom border.
    pub fn render<T: Display>(&self, rows: &[Vec<T>]) -> Result<String> {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        self.render_cells(&rows, self.headers.as_deref())
    }

    /// Render the complete table from typed records.
    ///
    /// Headers set on the table win; otherwise the record type's
    /// [`TabularRow::labels`] are used.
    pub fn render_records<T: TabularRow>(&self, records: &[T]) -> Result<String> {
        let rows: Vec<Vec<String>> = records.iter().map(TabularRow::to_row).collect();
        let labels = self.headers.clone().or_else(T::labels);
        self.render_cells(&rows, labels.as_deref())
    }

    fn render_cells(&self, rows: &[Vec<String>], labels: Option<&[String]>) -> Result<String> {
        let widths = column_widths(rows, labels)?;
        trace!(rows = rows.len(), ?widths, "rendering table");

        let mut output = self.top_border(&widths);

        if let Some(labels) = labels {
            output.push_str(&self.row(labels, &widths));
            output.push_str(&self.separator_row(&widths));
        }

        for (i, row) in rows.iter().enumerate() {
            if i > 0 && self.row_separator {
                output.push_str(&self.separator_row(&widths));
            }
            output.push_str(&self.row(row, &widths));
        }

        output.push_str(&self.bottom_border(&widths));
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;

    fn data() -> Vec<Vec<&'static str>> {
        vec![vec!["Alice", "100"], vec!["Bob", "200"]]
    }

    #[test]
    fn table_render_full() {
        let table = Table::new().header(vec!["Name", "Value"]);
        let output = table.render(&data()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "┌───────┬───────┐");
        assert_eq!(lines[1], "│ Name  │ Value │");
        assert_eq!(lines[2], "├───────┼───────┤");
        assert_eq!(lines[3], "│ Alice │ 100   │");
        assert_eq!(lines[4], "│ Bob   │ 200   │");
        assert_eq!(lines[5], "└───────┴───────┘");
        assert!(output.ends_with("┘\n"));
    }

    #[test]
    fn table_without_header() {
        let output = Table::new().render(&data()).unwrap();
        assert_eq!(output.lines().count(), 4);
        assert!(!output.contains('├'));
    }

    #[test]
    fn table_with_heavy_border() {
        let output = Table::new().border(BorderStyle::Heavy).render(&data()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with('┏'));
        assert!(lines[1].starts_with('┃'));
        assert!(lines[1].ends_with('┃'));
        assert!(lines[3].ends_with('┛'));
    }

    #[test]
    fn table_with_ascii_border() {
        let output = Table::new().border(BorderStyle::Ascii).render(&data()).unwrap();
        assert_eq!(
            output,
            "+-------+-----+\n| Alice | 100 |\n| Bob   | 200 |\n+-------+-----+\n"
        );
    }

    #[test]
    fn table_centered_header() {
        let table = Table::new().align(Align::Center).header(["Name", "Value"]);
        let output = table.render(&data()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "│ Name  │ Value │");
        assert_eq!(lines[3], "│ Alice │  100  │");
        assert_eq!(lines[4], "│  Bob  │  200  │");
    }

    #[test]
    fn table_row_separator_option() {
        let table = Table::new().row_separator(true);
        let data = vec![vec!["A", "1"], vec!["B", "2"], vec!["C", "3"]];
        let output = table.render(&data).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        // top, A, sep, B, sep, C, bottom
        assert_eq!(lines.len(), 7);
        let sep_count = lines.iter().filter(|l| l.starts_with('├')).count();
        assert_eq!(sep_count, 2, "Expected 2 separators between 3 rows");
    }

    #[test]
    fn table_row_separator_disabled_by_default() {
        let data = vec![vec!["A", "1"], vec!["B", "2"]];
        let output = Table::new().render(&data).unwrap();
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn table_row_separator_with_header() {
        let table = Table::new().header(["k", "v"]).row_separator(true);
        let data = vec![vec!["A", "1"], vec!["B", "2"]];
        let output = table.render(&data).unwrap();
        let sep_count = output.lines().filter(|l| l.starts_with('├')).count();
        assert_eq!(sep_count, 2);
    }

    #[test]
    fn table_mismatched_header_fails() {
        let table = Table::new().header(["only"]);
        assert_eq!(
            table.render(&data()),
            Err(ShapeError::LabelLength {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn table_empty_grid_fails() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(Table::new().render(&rows), Err(ShapeError::EmptyGrid));
    }

    #[test]
    fn table_from_options_roundtrip() {
        let options = TableOptions {
            border: BorderStyle::Double,
            align: Align::Right,
            row_separator: true,
        };
        let table = Table::from_options(&options);
        assert_eq!(table.get_border(), BorderStyle::Double);
        assert_eq!(table.get_align(), Align::Right);
        assert_eq!(table.options(), options);
        assert!(table.headers().is_none());
    }

    #[test]
    fn table_parts_match_render() {
        let table = Table::new().header(["a", "b"]);
        let rows: Vec<Vec<String>> = data()
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect();
        let widths = column_widths(&rows, table.headers()).unwrap();
        assert_eq!(widths, vec![5, 3]);

        let output = table.render(&data()).unwrap();
        assert!(output.starts_with(&table.top_border(&widths)));
        assert!(output.ends_with(&table.bottom_border(&widths)));
        assert!(output.contains(&table.separator_row(&widths)));
        assert!(output.contains(&table.row(&["Alice", "100"], &widths)));
    }

    #[test]
    fn render_numbers() {
        let rows = vec![vec![1.5, 10.0], vec![-3.25, 0.0]];
        let output = Table::new().render(&rows).unwrap();
        assert!(output.contains("│ 1.5   │ 10 │"));
        assert!(output.contains("│ -3.25 │ 0  │"));
    }
}
