//! Column width calculation and shape validation.

use std::fmt::Display;

use tracing::debug;

use crate::error::{Result, ShapeError};
use crate::util::text_len;

/// Computes the width of every column.
///
/// A column is as wide as its longest value, counting the label when one is
/// given. This is also where the grid's shape is checked: every row must be
/// as long as the first, and so must the labels.
///
/// # Example
///
/// ```rust
/// use standout_table::column_widths;
///
/// let rows = vec![vec!["1", "2"], vec!["3", "40"]];
/// assert_eq!(column_widths(&rows, None).unwrap(), vec![1, 2]);
/// assert_eq!(column_widths(&rows, Some(&["id", "n"][..])).unwrap(), vec![2, 2]);
/// ```
pub fn column_widths<T: Display>(rows: &[Vec<T>], labels: Option<&[T]>) -> Result<Vec<usize>> {
    measure_columns(rows, labels)
}

/// Like [`column_widths`], with labels of a different type than the cells.
pub(crate) fn measure_columns<T: Display, L: Display>(
    rows: &[Vec<T>],
    labels: Option<&[L]>,
) -> Result<Vec<usize>> {
    let expected = check_shape(rows, labels)?;
    let mut widths = vec![0; expected];

    for row in rows {
        widen(&mut widths, row);
    }
    if let Some(labels) = labels {
        widen(&mut widths, labels);
    }

    Ok(widths)
}

fn widen<T: Display>(widths: &mut [usize], cells: &[T]) {
    for (width, cell) in widths.iter_mut().zip(cells) {
        *width = (*width).max(text_len(&cell.to_string()));
    }
}

/// Returns the column count of a rectangular grid.
pub(crate) fn check_shape<T, L>(rows: &[Vec<T>], labels: Option<&[L]>) -> Result<usize> {
    let Some(first) = rows.first() else {
        debug!("rejecting empty grid");
        return Err(ShapeError::EmptyGrid);
    };
    let expected = first.len();

    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        debug!(row, expected, found, "rejecting ragged grid");
        return Err(ShapeError::RowLength {
            row,
            expected,
            found,
        });
    }

    if let Some(labels) = labels {
        if labels.len() != expected {
            debug!(expected, found = labels.len(), "rejecting label row");
            return Err(ShapeError::LabelLength {
                expected,
                found: labels.len(),
            });
        }
    }

    Ok(expected)
}
