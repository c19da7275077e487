//! Border glyphs and horizontal lines.
//!
//! A [`BorderStyle`] names a set of box-drawing characters. A [`LineRole`]
//! picks the four glyphs (start, fill, delimiter, end) a horizontal line
//! needs, and [`build_line`] lays them out against the column widths.
//!
//! ```rust
//! use standout_table::{border_line, BorderStyle, LineRole};
//!
//! let top = border_line(BorderStyle::Light, LineRole::Top, &[1, 2]);
//! assert_eq!(top, "┌───┬────┐\n");
//! ```

use serde::{Deserialize, Serialize};

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[default]
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
    /// ASCII borders: +, -, |
    Ascii,
}

impl BorderStyle {
    /// Get the box-drawing characters for this border style.
    pub fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Light => BorderChars::LIGHT,
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                ..BorderChars::LIGHT
            },
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
        }
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

impl BorderChars {
    /// The default glyph set: `│ ─ ┌ ┬ ┐ ├ ┼ ┤ └ ┴ ┘`.
    pub const LIGHT: BorderChars = BorderChars {
        horizontal: '─',
        vertical: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        left_t: '├',
        cross: '┼',
        right_t: '┤',
        top_t: '┬',
        bottom_t: '┴',
    };

    /// Returns `(start, fill, delimiter, end)` for a horizontal line.
    pub fn line_glyphs(&self, role: LineRole) -> (char, char, char, char) {
        match role {
            LineRole::Top => (self.top_left, self.horizontal, self.top_t, self.top_right),
            LineRole::Middle => (self.left_t, self.horizontal, self.cross, self.right_t),
            LineRole::Bottom => (
                self.bottom_left,
                self.horizontal,
                self.bottom_t,
                self.bottom_right,
            ),
        }
    }
}

/// Position of a horizontal line within the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRole {
    /// First line of the table.
    Top,
    /// Separator under the labels, and between rows when enabled.
    Middle,
    /// Last line of the table.
    Bottom,
}

/// Builds one horizontal line, newline included.
///
/// Each column contributes `width + 2` fill glyphs so the line meets the
/// single space of padding on both sides of every cell.
pub fn build_line(
    start: char,
    fill: char,
    delimiter: char,
    end: char,
    col_widths: &[usize],
) -> String {
    let mut line = String::new();
    line.push(start);
    for (i, &width) in col_widths.iter().enumerate() {
        if i > 0 {
            line.push(delimiter);
        }
        line.extend(std::iter::repeat_n(fill, width + 2));
    }
    line.push(end);
    line.push('\n');
    line
}

/// Builds the horizontal line for `role` in the given style.
pub fn border_line(style: BorderStyle, role: LineRole, col_widths: &[usize]) -> String {
    let (start, fill, delimiter, end) = style.chars().line_glyphs(role);
    build_line(start, fill, delimiter, end, col_widths)
}
