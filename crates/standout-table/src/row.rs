//! Content rows.
//!
//! Every cell is `width + 2` characters wide, which leaves one space of
//! padding against each delimiter for the longest value in the column.
//! Values must render on a single line; embedded newlines are not detected
//! and break the layout.

use std::fmt::Display;

use crate::border::BorderStyle;
use crate::types::Align;
use crate::util::{pad_center, pad_left, pad_right};

/// Builds one content row with the default light border, newline included.
///
/// Left-aligned cells get a leading space and are padded on the right.
/// Centered cells split the slack evenly, the extra space going right.
///
/// # Panics
///
/// Panics if `row` has more values than `col_widths` has entries.
///
/// # Example
///
/// ```rust
/// use standout_table::build_row;
///
/// assert_eq!(build_row(&["a"], &[3], false), "│ a   │\n");
/// assert_eq!(build_row(&["a"], &[3], true), "│  a  │\n");
/// ```
pub fn build_row<T: Display>(row: &[T], col_widths: &[usize], centered: bool) -> String {
    build_row_aligned(row, col_widths, Align::from(centered), BorderStyle::Light)
}

/// Builds one content row with explicit alignment and border style.
///
/// Right-aligned cells are padded on the left and keep one trailing space.
pub fn build_row_aligned<T: Display>(
    row: &[T],
    col_widths: &[usize],
    align: Align,
    style: BorderStyle,
) -> String {
    let vertical = style.chars().vertical;
    let mut line = String::new();
    line.push(vertical);
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            line.push(vertical);
        }
        line.push_str(&format_cell(&value.to_string(), col_widths[i], align));
    }
    line.push(vertical);
    line.push('\n');
    line
}

fn format_cell(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!(" {}", pad_right(text, width + 1)),
        Align::Right => format!("{} ", pad_left(text, width + 1)),
        Align::Center => pad_center(text, width + 2),
    }
}
