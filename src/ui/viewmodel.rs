//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; no business
//! logic runs during rendering.
//!
//! # Example
//!
//! ```rust
//! use profiledeck::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: " Profile Deck ".to_string(),
//!         stats: vec![],
//!         fetched: None,
//!     },
//!     search_bar: None,
//!     lines: vec![],
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     detail: None,
//! };
//! assert!(vm.lines.is_empty());
//! ```

use crate::app::Section;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar and stat badges.
    pub header: HeaderInfo,

    /// Search input, shown in search mode or while a query is applied.
    pub search_bar: Option<SearchBarInfo>,

    /// Visible window of roster lines (section headings, rows, notices).
    pub lines: Vec<RosterLine>,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Full-screen message replacing the dashboard (loading).
    pub empty_state: Option<EmptyState>,

    /// Detail overlay for the selected profile.
    pub detail: Option<DetailCard>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub stats: Vec<StatBadge>,
    /// Age of the loaded batch, e.g. `"3m ago"`.
    pub fetched: Option<String>,
}

/// A labelled counter in the header ("Users 15").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBadge {
    pub label: &'static str,
    pub value: usize,
    pub kind: Badge,
}

/// One line of the scrolling roster.
#[derive(Debug, Clone)]
pub enum RosterLine {
    /// Section title with its profile count.
    Heading {
        section: Section,
        title: String,
        count: usize,
    },
    /// A profile row.
    Row(DisplayItem),
    /// Informational text inside a section (e.g. no search results).
    Notice(String),
    /// Blank separator between sections.
    Spacer,
}

/// Classification badge shown next to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Favorite,
    Available,
    Blocked,
}

impl Badge {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Favorite => "Favorite",
            Self::Available => "Available",
            Self::Blocked => "Blocked",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Favorite => "♥",
            Self::Available => "·",
            Self::Blocked => "⊘",
        }
    }
}

/// Display information for a single profile row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Profile id, used to map the row back to state.
    pub id: String,

    /// Full name, truncated to the name column.
    pub name: String,

    pub badge: Badge,

    pub gender: String,

    pub country: String,

    pub email: String,

    /// `"{city}, {state}"`.
    pub locality: String,

    /// Whether the keyboard cursor is on this row.
    pub is_selected: bool,

    /// Character ranges of `name` to highlight for the active search.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail overlay contents for the selected profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub name: String,
    pub email: String,
    /// Labelled fields in display order.
    pub fields: Vec<(&'static str, String)>,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Full-screen message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// `true` while keys are typed into the query.
    pub focused: bool,
}
