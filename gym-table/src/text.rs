//! Text fitting utilities for fixed-width cells
//!
//! Widths are counted in characters, so a multi-byte name takes the same
//! room as an ASCII one. This module provides utilities for:
//! - Calculating display widths
//! - Truncating text with a trailing ellipsis
//! - Padding text to a column width
//! - Sanitizing values so they cannot break the row structure

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Get the display width of a string
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string that is longer than `max_width`
///
/// The first `max_width - 3` characters are kept and `...` is appended, so
/// the result is exactly `max_width` wide. Text that fits is returned as is.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if text_width(s) <= max_width {
        return s.to_string();
    }
    let keep = max_width.saturating_sub(ELLIPSIS.len());
    let mut result: String = s.chars().take(keep).collect();
    result.push_str(ELLIPSIS);
    result
}

/// Pad a string with trailing spaces to a specific width
///
/// Longer strings are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current_width = text_width(s);
    if current_width >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - current_width))
}

/// Truncate then pad, so the result is exactly `width` wide
pub fn fit(s: &str, width: usize) -> String {
    pad_right(&truncate_with_ellipsis(s, width), width)
}

/// Replace characters that would break a pipe-delimited row
///
/// `|` becomes `/`, line breaks become spaces.
pub fn sanitize_cell(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '|' => '/',
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("hello"), 5);
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("Zoë"), 3);
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 15), "short");
        assert_eq!(truncate_with_ellipsis("exactly fifteen", 15), "exactly fifteen");
        assert_eq!(
            truncate_with_ellipsis("Alexandria Ocasio", 15),
            "Alexandria O..."
        );
        assert_eq!(text_width(&truncate_with_ellipsis("Alexandria Ocasio", 15)), 15);
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_with_ellipsis("ÅÅÅÅÅÅ", 5), "ÅÅ...");
    }

    #[test]
    fn test_truncate_narrow_width() {
        assert_eq!(truncate_with_ellipsis("abcdef", 2), "...");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 5), "ab   ");
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Pokhara", 12), "Pokhara     ");
        assert_eq!(fit("Kathmandu Valley", 12), "Kathmandu...");
    }

    #[test]
    fn test_sanitize_cell() {
        assert_eq!(sanitize_cell("a|b"), "a/b");
        assert_eq!(sanitize_cell("line\nbreak"), "line break");
        assert_eq!(sanitize_cell("plain"), "plain");
    }
}
