//! Header component renderer.
//!
//! Renders the title bar: the plugin title on the left and the stat badges
//! (users, favorites, blocked) plus the fetch age on the right.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Badge, HeaderInfo};

/// Renders the header title bar at the specified row.
///
/// Returns the next available row position (row + 1).
///
/// # Layout
///
/// ```text
///  Profile Deck                 · Users 15  ♥ Favorites 2  ⊘ Blocked 1  3m ago
/// ```
///
/// On narrow panes the badges are dropped before the title is.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();

    let mut stats_plain = header
        .stats
        .iter()
        .map(|s| format!("{} {} {}", s.kind.glyph(), s.label, s.value))
        .collect::<Vec<_>>()
        .join("  ");
    if let Some(fetched) = &header.fetched {
        stats_plain.push_str("  ");
        stats_plain.push_str(fetched);
    }
    stats_plain.push(' ');
    let stats_len = stats_plain.chars().count();
    let show_stats = title_len + stats_len < cols;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    let bg = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();
    print!("{bg}");
    print!("{}", header.title);
    print!("{}", Theme::reset());
    print!("{bg}");

    if show_stats {
        print!("{}", " ".repeat(cols - title_len - stats_len));
        for (idx, stat) in header.stats.iter().enumerate() {
            if idx > 0 {
                print!("  ");
            }
            print!("{}", Theme::fg(badge_color(stat.kind, theme)));
            print!("{} ", stat.kind.glyph());
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{} ", stat.label);
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
            print!("{}", stat.value);
            print!("{}{bg}", Theme::reset());
        }
        if let Some(fetched) = &header.fetched {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("  {fetched}");
        }
        print!(" ");
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(title_len)));
    }

    print!("{}", Theme::reset());
    row + 1
}

/// Foreground color for a classification badge.
pub(crate) fn badge_color(badge: Badge, theme: &Theme) -> &str {
    match badge {
        Badge::Favorite => &theme.colors.favorite_fg,
        Badge::Available => &theme.colors.available_fg,
        Badge::Blocked => &theme.colors.blocked_fg,
    }
}
