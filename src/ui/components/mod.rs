//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - `header`: Title bar with stat badges
//! - `footer`: Keybinding hints
//! - `search`: Search input box
//! - `roster`: Sectioned profile list
//! - `detail`: Detail overlay for the selected profile
//! - `empty`: Loading screen
//!
//! # Layout
//!
//! [`render_dashboard`] draws header, optional search bar, roster and footer,
//! then the detail overlay on top when a profile is selected.

mod detail;
mod empty;
mod footer;
mod header;
mod roster;
mod search;

pub use detail::{detail_bounds, Bounds};
pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use footer::render_footer;
use header::render_header;
use roster::{render_roster, render_roster_headers};
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Row of the border above the footer; the footer takes the last row.
const fn footer_border_row(rows: usize) -> usize {
    rows.saturating_sub(1)
}

/// Renders the dashboard layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, when visible]
/// [Column Headers]
/// [Roster lines]
/// [Blank padding to fill screen]
/// [Border]               (rows - 1)
/// [Footer]               (last row)
/// ```
///
/// Chrome takes 6 rows, 9 with the search bar; the view model's roster window
/// is sized to match.
pub fn render_dashboard(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_roster_headers(current_row, theme, cols);
    let _current_row = render_roster(current_row, &vm.lines, theme, cols);

    render_border(footer_border_row(rows), &theme.colors.border, cols);
    render_footer(rows, &vm.footer, theme, cols);

    if let Some(card) = &vm.detail {
        render_detail(card, theme, rows, cols);
    }
}
