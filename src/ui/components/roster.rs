//! Roster component renderer.
//!
//! Renders the sectioned profile list: section headings with counts, one row
//! per profile, and notices such as an empty search result. Rows carry a
//! classification badge, the (highlighted) name and the contact columns.

use super::header::badge_color;
use crate::ui::helpers::{self, pad_to_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, RosterLine};

const MARKER_WIDTH: usize = 2;
const BADGE_WIDTH: usize = 12;
const NAME_WIDTH: usize = 26;
const GENDER_WIDTH: usize = 8;
const COUNTRY_WIDTH: usize = 16;

/// Renders the column headers at the specified row.
///
/// ```text
///   STATUS      NAME                      GENDER  COUNTRY         EMAIL / LOCATION
/// ```
pub fn render_roster_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let text = format!(
        "{}{}{}{}{}EMAIL / LOCATION",
        " ".repeat(MARKER_WIDTH),
        pad_to_width("STATUS", BADGE_WIDTH),
        pad_to_width("NAME", NAME_WIDTH),
        pad_to_width("GENDER", GENDER_WIDTH),
        pad_to_width("COUNTRY", COUNTRY_WIDTH),
    );
    let text = truncate_chars(&text, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", pad_to_width(&text, cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every roster line starting at `row`. Returns the next free row.
pub fn render_roster(row: usize, lines: &[RosterLine], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for line in lines {
        position_cursor(current_row, 1);
        match line {
            RosterLine::Heading { title, count, .. } => {
                let text = truncate_chars(&format!(" {title} ({count})"), cols);
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.header_fg));
                print!("{}", pad_to_width(&text, cols));
            }
            RosterLine::Row(item) => render_row(item, theme, cols),
            RosterLine::Notice(message) => {
                let text = truncate_chars(&format!("    {message}"), cols);
                print!("{}", Theme::fg(&theme.colors.empty_state_fg));
                print!("{}", pad_to_width(&text, cols));
            }
            RosterLine::Spacer => print!("{}", " ".repeat(cols)),
        }
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}

/// Renders one profile row.
///
/// Selection colors cover the whole line; otherwise the badge takes its
/// classification color and the tail columns are dimmed. Name highlights
/// re-apply the row style after each match.
fn render_row(item: &DisplayItem, theme: &Theme, cols: usize) {
    let row_style = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    let marker = if item.is_selected { "▸ " } else { "  " };
    let badge = pad_to_width(
        &format!("{} {}", item.badge.glyph(), item.badge.label()),
        BADGE_WIDTH,
    );

    print!("{row_style}{marker}");
    if !item.is_selected {
        print!("{}", Theme::fg(badge_color(item.badge, theme)));
    }
    print!("{badge}{row_style}");

    print!(
        "{}",
        helpers::highlighted_text(&item.name, &item.highlight_ranges, theme, &row_style)
    );
    print!(
        "{}",
        " ".repeat(NAME_WIDTH.saturating_sub(item.name.chars().count()))
    );
    print!("{}", pad_to_width(&item.gender, GENDER_WIDTH));
    print!("{}", pad_to_width(&item.country, COUNTRY_WIDTH));

    let fixed = MARKER_WIDTH + BADGE_WIDTH + NAME_WIDTH + GENDER_WIDTH + COUNTRY_WIDTH;
    let tail = truncate_chars(
        &format!("{}  {}", item.email, item.locality),
        cols.saturating_sub(fixed),
    );
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", pad_to_width(&tail, cols.saturating_sub(fixed)));
}
