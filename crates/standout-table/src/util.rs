//! Text measurement and padding.
//!
//! Width is the number of `char`s in a string. Wide and combining characters
//! are not treated specially, so tables line up only for text where every
//! character occupies one terminal column.

/// Returns the width of a string in characters.
///
/// # Example
///
/// ```rust
/// use standout_table::text_len;
///
/// assert_eq!(text_len("hello"), 5);
/// assert_eq!(text_len("─┼─"), 3);
/// ```
pub fn text_len(s: &str) -> usize {
    s.chars().count()
}

/// Pads a string on the left to reach the target width.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_len(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.extend(std::iter::repeat_n(' ', pad));
    out.push_str(s);
    out
}

/// Pads a string on the right to reach the target width.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_len(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
///
/// # Example
///
/// ```rust
/// use standout_table::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    let slack = width.saturating_sub(text_len(s));
    let left = slack / 2;
    let right = slack - left;
    let mut out = String::with_capacity(s.len() + slack);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', right));
    out
}
