//! Error types for table rendering.

use thiserror::Error;

/// Convenience alias for rendering results.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// The grid handed to the renderer is not rectangular.
///
/// Shape checks run before any line is built, so a failed render never
/// produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// No rows were given, so the column count is unknown.
    #[error("cannot render a table without rows")]
    EmptyGrid,

    /// A data row has a different length than the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The label row has a different length than the data rows.
    #[error("labels have {found} columns, expected {expected}")]
    LabelLength { expected: usize, found: usize },
}
