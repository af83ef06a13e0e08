//! Detail overlay renderer.
//!
//! Draws a bordered box over the dashboard with the selected profile's
//! contact details. [`detail_bounds`] is shared with the event handler so a
//! click can be tested against the exact box that was drawn.

use crate::ui::helpers::{pad_to_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailCard;

/// Height of the overlay including borders.
const DETAIL_HEIGHT: usize = 13;

/// Maximum width of the overlay including borders.
const DETAIL_MAX_WIDTH: usize = 72;

/// Width reserved for field labels.
const LABEL_WIDTH: usize = 13;

/// Screen rectangle in 1-indexed cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub top: usize,
    pub left: usize,
    pub height: usize,
    pub width: usize,
}

impl Bounds {
    /// Whether the 1-indexed cell `(row, col)` lies inside the box.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top
            && row < self.top + self.height
            && col >= self.left
            && col < self.left + self.width
    }
}

/// Computes where the overlay is drawn in a pane of `rows` x `cols`.
///
/// The box is centered; on small panes it shrinks to fit.
///
/// # Example
///
/// ```rust
/// use profiledeck::ui::components::detail_bounds;
///
/// let bounds = detail_bounds(24, 80);
/// assert!(bounds.contains(12, 40));
/// assert!(!bounds.contains(1, 1));
/// ```
#[must_use]
pub fn detail_bounds(rows: usize, cols: usize) -> Bounds {
    let width = cols.saturating_sub(4).min(DETAIL_MAX_WIDTH);
    let height = DETAIL_HEIGHT.min(rows);
    Bounds {
        top: (rows.saturating_sub(height)) / 2 + 1,
        left: (cols.saturating_sub(width)) / 2 + 1,
        height,
        width,
    }
}

/// Renders the overlay on top of whatever was drawn before.
///
/// ```text
/// ┌─ Ana Lopez ─────────────────────────────────┐
/// │ ana.lopez@example.com                        │
/// │                                              │
/// │ Gender       female                          │
/// │ ...                                          │
/// └──────────────────────────────── Esc: close ──┘
/// ```
pub fn render_detail(card: &DetailCard, theme: &Theme, rows: usize, cols: usize) {
    let bounds = detail_bounds(rows, cols);
    if bounds.width < 4 || bounds.height < 3 {
        return;
    }
    let inner = bounds.width - 2;
    let border = Theme::fg(&theme.colors.overlay_border);

    let title = truncate_chars(&format!("─ {} ", card.name), inner);
    position_cursor(bounds.top, bounds.left);
    print!("{border}┌");
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}{border}", Theme::reset());
    print!("{}┐", "─".repeat(inner.saturating_sub(title.chars().count())));

    let mut body: Vec<(String, String)> = vec![(card.email.clone(), String::new())];
    body.push((String::new(), String::new()));
    body.extend(
        card.fields
            .iter()
            .map(|(label, value)| (pad_to_width(label, LABEL_WIDTH), value.clone())),
    );

    let body_rows = bounds.height - 2;
    for offset in 0..body_rows {
        let (label, value) = body.get(offset).cloned().unwrap_or_default();
        let text = truncate_chars(&format!(" {label}{value}"), inner);
        let label_len = label.chars().count() + 1;

        position_cursor(bounds.top + 1 + offset, bounds.left);
        print!("{}{border}│", Theme::reset());
        if value.is_empty() || label.is_empty() {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", pad_to_width(&text, inner));
        } else {
            let (head, rest): (String, String) = {
                let chars: Vec<char> = text.chars().collect();
                let split = label_len.min(chars.len());
                (chars[..split].iter().collect(), chars[split..].iter().collect())
            };
            print!("{}{head}", Theme::fg(&theme.colors.text_dim));
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", pad_to_width(&rest, inner - head.chars().count()));
        }
        print!("{border}│");
    }

    let hint = " Esc: close ";
    let hint_len = hint.chars().count();
    position_cursor(bounds.top + bounds.height - 1, bounds.left);
    print!("{}{border}└", Theme::reset());
    if inner > hint_len + 2 {
        print!("{}", "─".repeat(inner - hint_len - 2));
        print!("{}{hint}{border}──", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", "─".repeat(inner));
    }
    print!("┘{}", Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_centered_and_capped() {
        let b = detail_bounds(40, 200);
        assert_eq!(b.width, DETAIL_MAX_WIDTH);
        assert_eq!(b.height, DETAIL_HEIGHT);
        assert_eq!(b.left, (200 - 72) / 2 + 1);
        assert_eq!(b.top, (40 - 13) / 2 + 1);
    }

    #[test]
    fn bounds_shrink_on_small_panes() {
        let b = detail_bounds(10, 30);
        assert_eq!(b.width, 26);
        assert_eq!(b.height, 10);
        assert_eq!(b.top, 1);
        assert_eq!(b.left, 3);
    }

    #[test]
    fn contains_checks_every_edge() {
        let b = Bounds { top: 5, left: 10, height: 3, width: 4 };
        assert!(b.contains(5, 10));
        assert!(b.contains(7, 13));
        assert!(!b.contains(8, 10));
        assert!(!b.contains(5, 14));
        assert!(!b.contains(4, 11));
        assert!(!b.contains(6, 9));
    }
}
