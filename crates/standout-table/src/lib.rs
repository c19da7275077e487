//! # Standout Table - Box-Drawn Text Tables
//!
//! `standout-table` renders a rectangular grid of values as a text table
//! framed with box-drawing characters. Column widths are taken from the
//! data, so the output always lines up for single-width text.
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_table::make_table;
//!
//! let rows = vec![vec!["1", "2"], vec!["3", "40"]];
//! let table = make_table(&rows, None, false).unwrap();
//!
//! assert_eq!(
//!     table,
//!     "┌───┬────┐\n\
//!      │ 1 │ 2  │\n\
//!      │ 3 │ 40 │\n\
//!      └───┴────┘\n"
//! );
//! ```
//!
//! ## Building Blocks
//!
//! The renderer is three pure functions, all public:
//!
//! - [`column_widths`]: measures every column and validates the grid shape
//! - [`build_line`]: draws a horizontal border or separator
//! - [`build_row`]: draws a content row with padding and delimiters
//!
//! [`make_table`] chains them with the light glyph set. [`Table`] adds border
//! styles, right alignment, row separators, and typed records, and can be
//! configured from a [`TableOptions`] document.
//!
//! ## Input Requirements
//!
//! Cells are anything that implements `Display`. Each value must render on
//! a single line. Width is counted in `char`s, so wide or combining
//! characters will not align.

mod border;
mod error;
mod row;
mod table;
mod traits;
mod types;
mod util;
mod width;

pub use border::{border_line, build_line, BorderChars, BorderStyle, LineRole};
pub use error::{Result, ShapeError};
pub use row::{build_row, build_row_aligned};
pub use table::Table;
pub use traits::TabularRow;
pub use types::{Align, TableOptions};
pub use util::{pad_center, pad_left, pad_right, text_len};
pub use width::column_widths;

use std::fmt::Display;

use width::measure_columns;

/// Renders `rows` as a box-drawn table with light borders.
///
/// When `labels` is given it is drawn as a header row above a separator.
/// With `centered` every cell, labels included, is centered in its column;
/// otherwise cells are left-aligned.
///
/// The grid is validated before anything is drawn, so an error never comes
/// with partial output.
///
/// # Errors
///
/// Returns [`ShapeError`] when `rows` is empty, when rows differ in length,
/// or when `labels` does not match the row length.
///
/// # Example
///
/// ```rust
/// use standout_table::make_table;
///
/// let rows = vec![vec!["x"]];
/// let table = make_table(&rows, Some(&["Col"][..]), false).unwrap();
///
/// assert_eq!(
///     table,
///     "┌─────┐\n\
///      │ Col │\n\
///      ├─────┤\n\
///      │ x   │\n\
///      └─────┘\n"
/// );
/// ```
pub fn make_table<T: Display>(
    rows: &[Vec<T>],
    labels: Option<&[T]>,
    centered: bool,
) -> Result<String> {
    render_light(rows, labels, centered)
}

/// Renders `rows` under a label row whose values may differ in type from
/// the cells, such as text labels over numbers.
///
/// # Errors
///
/// Same as [`make_table`].
///
/// # Example
///
/// ```rust
/// use standout_table::make_table_with_labels;
///
/// let rows = vec![vec![3, 12], vec![10, 4]];
/// let table = make_table_with_labels(&rows, &["qty", "price"], false).unwrap();
///
/// assert_eq!(
///     table,
///     "┌─────┬───────┐\n\
///      │ qty │ price │\n\
///      ├─────┼───────┤\n\
///      │ 3   │ 12    │\n\
///      │ 10  │ 4     │\n\
///      └─────┴───────┘\n"
/// );
/// ```
pub fn make_table_with_labels<T: Display, L: Display>(
    rows: &[Vec<T>],
    labels: &[L],
    centered: bool,
) -> Result<String> {
    render_light(rows, Some(labels), centered)
}

fn render_light<T: Display, L: Display>(
    rows: &[Vec<T>],
    labels: Option<&[L]>,
    centered: bool,
) -> Result<String> {
    let col_widths = measure_columns(rows, labels)?;
    let line = |role| border_line(BorderStyle::Light, role, &col_widths);

    let mut output = line(LineRole::Top);
    if let Some(labels) = labels {
        output.push_str(&build_row(labels, &col_widths, centered));
        output.push_str(&line(LineRole::Middle));
    }
    for row in rows {
        output.push_str(&build_row(row, &col_widths, centered));
    }
    output.push_str(&line(LineRole::Bottom));

    Ok(output)
}
