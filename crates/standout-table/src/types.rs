//! Configuration types for table layout.

use serde::{Deserialize, Serialize};

use crate::border::BorderStyle;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides, extra space on the right).
    Center,
}

impl From<bool> for Align {
    /// Maps a `centered` flag onto [`Align::Center`] or [`Align::Left`].
    fn from(centered: bool) -> Self {
        if centered {
            Align::Center
        } else {
            Align::Left
        }
    }
}

/// Serializable table settings.
///
/// Every field has a default, so partial documents are accepted:
///
/// ```rust
/// use standout_table::{Align, BorderStyle, TableOptions};
///
/// let opts: TableOptions = serde_json::from_str(r#"{"border": "double"}"#).unwrap();
/// assert_eq!(opts.border, BorderStyle::Double);
/// assert_eq!(opts.align, Align::Left);
/// assert!(!opts.row_separator);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Glyph set for borders and delimiters.
    pub border: BorderStyle,
    /// Alignment applied to every cell, labels included.
    pub align: Align,
    /// Draw a separator line between consecutive data rows.
    pub row_separator: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_from_centered_flag() {
        assert_eq!(Align::from(true), Align::Center);
        assert_eq!(Align::from(false), Align::Left);
    }

    #[test]
    fn align_serde_names() {
        let json = serde_json::to_string(&Align::Center).unwrap();
        assert_eq!(json, "\"center\"");
        let parsed: Align = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(parsed, Align::Right);
    }

    #[test]
    fn options_default_when_empty() {
        let opts: TableOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, TableOptions::default());
        assert_eq!(opts.border, BorderStyle::Light);
    }

    #[test]
    fn options_full_document() {
        let opts: TableOptions = serde_json::from_str(
            r#"{"border": "ascii", "align": "center", "row_separator": true}"#,
        )
        .unwrap();
        assert_eq!(opts.border, BorderStyle::Ascii);
        assert_eq!(opts.align, Align::Center);
        assert!(opts.row_separator);
    }

    #[test]
    fn options_reject_unknown_border() {
        let res: Result<TableOptions, _> = serde_json::from_str(r#"{"border": "dotted"}"#);
        assert!(res.is_err());
    }
}
