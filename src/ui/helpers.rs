//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across the UI components: cursor positioning,
//! character-safe truncation and padding, and search match highlighting with
//! proper ANSI escape sequence management. All width math is done in
//! characters, never bytes.
//!
//! # Example
//!
//! ```rust
//! use profiledeck::ui::helpers::{pad_to_width, truncate_chars};
//!
//! assert_eq!(truncate_chars("Margarita Fernández", 10), "Margari...");
//! assert_eq!(pad_to_width("Ana", 5), "Ana  ");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `max` characters, ending in `...` when cut.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Right-pads `text` with spaces to `width` characters.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

/// Builds `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices with exclusive end. After each
/// highlighted section `restore` is re-emitted so the surrounding style (row
/// color or selection colors) carries on.
#[must_use]
pub fn highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_chars("José", 4), "José");
        assert_eq!(truncate_chars("Émilie Leclerc", 8), "Émili...");
        assert_eq!(truncate_chars("abcdef", 2), "ab");
    }

    #[test]
    fn pad_never_shrinks() {
        assert_eq!(pad_to_width("abc", 2), "abc");
        assert_eq!(pad_to_width("ñ", 3), "ñ  ");
    }

    #[test]
    fn highlight_wraps_only_the_range() {
        let theme = Theme::default();
        let out = highlighted_text("Ana Lopez", &[(4, 7)], &theme, "");

        assert!(out.starts_with("Ana "));
        assert!(out.ends_with("ez"));
        assert!(out.contains("Lop"));
        assert!(out.contains(Theme::reset()));
    }

    #[test]
    fn highlight_ignores_out_of_bounds_ranges() {
        let theme = Theme::default();
        assert_eq!(highlighted_text("Ana", &[(5, 9)], &theme, ""), "Ana");
        assert_eq!(highlighted_text("Ana", &[], &theme, ""), "Ana");
    }
}
