//! Rendering typed records.

/// A record that can be drawn as one table row.
///
/// [`Table::render_records`](crate::Table::render_records) calls
/// [`to_row`](TabularRow::to_row) once per record. When the table has no
/// headers of its own, the type's [`labels`](TabularRow::labels) become the
/// header row.
///
/// # Example
///
/// ```rust
/// use standout_table::{Table, TabularRow};
///
/// struct Task {
///     id: u32,
///     title: String,
///     owner: Option<String>,
/// }
///
/// impl TabularRow for Task {
///     fn to_row(&self) -> Vec<String> {
///         vec![
///             self.id.to_string(),
///             self.title.clone(),
///             self.owner.clone().unwrap_or_default(),
///         ]
///     }
///
///     fn labels() -> Option<Vec<String>> {
///         Some(vec!["ID".into(), "Title".into(), "Owner".into()])
///     }
/// }
///
/// let tasks = vec![
///     Task { id: 1, title: "Write docs".into(), owner: Some("ana".into()) },
///     Task { id: 2, title: "Fix bug".into(), owner: None },
/// ];
///
/// let output = Table::new().render_records(&tasks).unwrap();
/// assert!(output.contains("│ ID │ Title      │ Owner │"));
/// assert!(output.contains("│ 2  │ Fix bug    │       │"));
/// ```
pub trait TabularRow {
    /// The cell values of this record, one per column.
    fn to_row(&self) -> Vec<String>;

    /// Column labels for the record type. `None` draws no header row.
    fn labels() -> Option<Vec<String>> {
        None
    }
}
