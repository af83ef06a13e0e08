//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns the profile store, the favorite/blocked classification, the search
//! query, the detail selection and the keyboard cursor, and keeps the derived
//! [`ProfileViews`] in sync with them.
//!
//! # Architecture
//!
//! Core data (fetched profiles, classification, query) is kept apart from
//! derived data (the three display lists). Every mutation goes through a method
//! that ends in [`AppState::refresh_views`], so the views always describe the
//! current snapshot. View models are computed on demand from that snapshot.
//!
//! # Cursor
//!
//! The cursor is tracked by profile id rather than row index. When a profile
//! moves between sections (favorited, blocked, unblocked) the cursor moves with
//! it. When its profile leaves the dashboard (filtered out by search) the cursor
//! falls back to the row at the same position, clamped to the new length.
//!
//! # Example
//!
//! ```rust
//! use profiledeck::app::AppState;
//! use profiledeck::provider::ProfileRequest;
//! use profiledeck::ui::Theme;
//!
//! let state = AppState::new(ProfileRequest::default(), Theme::default());
//! assert!(state.store.is_loading());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::classification::{Classification, FavoriteToggle};
use super::modes::{InputMode, SearchFocus};
use super::search;
use super::selection::Selection;
use super::store::ProfileStore;
use super::views::{ProfileViews, Section};
use crate::domain::{FetchError, Profile};
use crate::provider::ProfileRequest;
use crate::ui::helpers::truncate_chars;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Badge, DetailCard, DisplayItem, EmptyState, FooterInfo, HeaderInfo, RosterLine,
    SearchBarInfo, StatBadge, UIViewModel,
};

/// Width of the name column in the roster.
const NAME_COLUMN_WIDTH: usize = 24;

/// Longest email shown in a roster row.
const EMAIL_COLUMN_WIDTH: usize = 36;

/// Width of the roster columns left of the email (marker, badge, name,
/// gender, country) as laid out by the roster component.
const FIXED_COLUMNS_WIDTH: usize = 64;

/// Rows taken by header, footer and borders.
const CHROME_ROWS: usize = 6;

/// Additional rows taken by the search bar.
const SEARCH_BAR_ROWS: usize = 3;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and host events.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fetched profiles and load status.
    pub store: ProfileStore,

    /// Favorite and blocked id sets.
    pub classification: Classification,

    /// Current name search query.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace`, cleared by
    /// `ClearSearch` and `ExitSearch`. Applies to the regular list only.
    pub search_query: String,

    /// Derived display lists. Recomputed by [`AppState::refresh_views`].
    pub views: ProfileViews,

    /// Profile shown in the detail overlay.
    pub selection: Selection,

    /// Id of the highlighted profile; `None` only when nothing is visible.
    pub cursor: Option<String>,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Provider request built from configuration.
    pub request: ProfileRequest,

    /// Set once the fetch action has been emitted.
    pub fetch_requested: bool,

    /// Last known pane size as `(rows, cols)`.
    pub viewport: (usize, usize),

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty, loading state.
    #[must_use]
    pub fn new(request: ProfileRequest, theme: Theme) -> Self {
        Self {
            store: ProfileStore::new(),
            classification: Classification::new(),
            search_query: String::new(),
            views: ProfileViews::default(),
            selection: Selection::default(),
            cursor: None,
            input_mode: InputMode::Normal,
            request,
            fetch_requested: false,
            viewport: (0, 0),
            theme,
        }
    }

    /// Re-derives the display lists and keeps the cursor on a visible row.
    pub fn refresh_views(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_views",
            total_profiles = self.store.profiles().len(),
            query_len = self.search_query.len()
        )
        .entered();

        let previous_index = self.cursor_position().map(|(idx, _)| idx);

        self.views = ProfileViews::derive(
            self.store.profiles(),
            &self.classification,
            &self.search_query,
        );

        let still_visible = self
            .cursor
            .as_deref()
            .is_some_and(|id| self.views.locate(id).is_some());

        if !still_visible {
            let fallback = previous_index
                .unwrap_or(0)
                .min(self.views.len().saturating_sub(1));
            self.cursor = self.views.iter().nth(fallback).map(|(_, p)| p.id.clone());
        }

        tracing::debug!(cursor = ?self.cursor, "views refreshed");
    }

    /// Applies the result of the initial fetch. Returns `true` if applied.
    pub fn load_profiles(&mut self, result: Result<Vec<Profile>, FetchError>) -> bool {
        if !self.store.complete(result) {
            return false;
        }
        self.refresh_views();
        true
    }

    /// Returns the profile under the cursor.
    #[must_use]
    pub fn cursor_profile(&self) -> Option<&Profile> {
        let id = self.cursor.as_deref()?;
        self.views.iter().find(|(_, p)| p.id == id).map(|(_, p)| p)
    }

    /// Returns the cursor's display index and section.
    #[must_use]
    pub fn cursor_position(&self) -> Option<(usize, Section)> {
        self.cursor.as_deref().and_then(|id| self.views.locate(id))
    }

    /// Moves the cursor down by one row, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        let len = self.views.len();
        if len == 0 {
            return;
        }
        let next = self.cursor_position().map_or(0, |(idx, _)| (idx + 1) % len);
        self.set_cursor_index(next);
    }

    /// Moves the cursor up by one row, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        let len = self.views.len();
        if len == 0 {
            return;
        }
        let prev = match self.cursor_position() {
            Some((0, _)) | None => len - 1,
            Some((idx, _)) => idx - 1,
        };
        self.set_cursor_index(prev);
    }

    /// Moves the cursor to the first row of the next (or previous) non-empty
    /// section, wrapping around.
    pub fn jump_section(&mut self, forward: bool) {
        let non_empty: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|s| !self.views.section(*s).is_empty())
            .collect();
        if non_empty.is_empty() {
            return;
        }

        let current = self
            .cursor_position()
            .and_then(|(_, section)| non_empty.iter().position(|s| *s == section));

        let target = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % non_empty.len(),
            (Some(0), false) => non_empty.len() - 1,
            (Some(i), false) => i - 1,
        };

        self.cursor = self
            .views
            .section(non_empty[target])
            .first()
            .map(|p| p.id.clone());
    }

    fn set_cursor_index(&mut self, index: usize) {
        self.cursor = self.views.iter().nth(index).map(|(_, p)| p.id.clone());
    }

    /// Toggles the favorite status of the cursor profile.
    ///
    /// Returns `None` when no row is highlighted.
    pub fn toggle_favorite_at_cursor(&mut self) -> Option<FavoriteToggle> {
        let id = self.cursor.clone()?;
        let outcome = self.classification.toggle_favorite(&id);
        tracing::debug!(profile_id = %id, outcome = ?outcome, "favorite toggled");
        if outcome != FavoriteToggle::Ignored {
            self.refresh_views();
        }
        Some(outcome)
    }

    /// Blocks the cursor profile. Returns `false` if nothing changed.
    pub fn block_at_cursor(&mut self) -> bool {
        let Some(id) = self.cursor.clone() else {
            return false;
        };
        if self.classification.is_blocked(&id) {
            return false;
        }
        tracing::debug!(profile_id = %id, "profile blocked");
        self.classification.block(&id);
        self.refresh_views();
        true
    }

    /// Unblocks the cursor profile. Returns `false` if nothing changed.
    pub fn unblock_at_cursor(&mut self) -> bool {
        let Some(id) = self.cursor.clone() else {
            return false;
        };
        if !self.classification.is_blocked(&id) {
            return false;
        }
        tracing::debug!(profile_id = %id, "profile unblocked");
        self.classification.unblock(&id);
        self.refresh_views();
        true
    }

    /// Opens the detail overlay for the cursor profile.
    pub fn show_cursor_details(&mut self) -> bool {
        let Some(profile) = self.cursor_profile().cloned() else {
            return false;
        };
        self.selection.select(profile);
        true
    }

    /// Replaces the search query and re-derives the views.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.refresh_views();
    }

    /// Whether the search bar occupies screen rows.
    #[must_use]
    pub fn search_bar_visible(&self) -> bool {
        self.input_mode.is_search() || !self.search_query.is_empty()
    }

    /// Computes a renderable UI view model for a pane of `rows` x `cols`.
    ///
    /// The roster (section headings, rows and notices) is windowed so that the
    /// cursor row stays visible, centered when possible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = self.compute_footer();
        let search_bar = self.compute_search_bar();

        if self.store.is_loading() {
            return UIViewModel {
                header,
                search_bar: None,
                lines: vec![],
                footer,
                empty_state: Some(EmptyState {
                    message: "Loading users...".to_string(),
                    subtitle: format!("Requesting {} profiles", self.request.batch_size()),
                }),
                detail: None,
            };
        }

        let (lines, cursor_line) = self.compute_roster(cols);
        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = cursor_line
            .unwrap_or(0)
            .saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(lines.len());
        if visible_end - visible_start < available_rows && lines.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        UIViewModel {
            header,
            search_bar,
            lines: lines[visible_start..visible_end].to_vec(),
            footer,
            empty_state: None,
            detail: self.selection.current().map(Self::compute_detail),
        }
    }

    /// Builds every roster line and returns the index of the cursor row.
    fn compute_roster(&self, cols: usize) -> (Vec<RosterLine>, Option<usize>) {
        let mut lines = Vec::new();
        let mut cursor_line = None;

        for section in Section::ALL {
            let profiles = self.views.section(section);
            if profiles.is_empty() && section != Section::Regular {
                continue;
            }

            if !lines.is_empty() {
                lines.push(RosterLine::Spacer);
            }
            lines.push(RosterLine::Heading {
                section,
                title: section.title().to_string(),
                count: profiles.len(),
            });

            if profiles.is_empty() {
                lines.push(RosterLine::Notice("No users match that name".to_string()));
                continue;
            }

            for profile in profiles {
                let item = self.compute_display_item(profile, section, cols);
                if item.is_selected {
                    cursor_line = Some(lines.len());
                }
                lines.push(RosterLine::Row(item));
            }
        }

        (lines, cursor_line)
    }

    fn compute_display_item(&self, profile: &Profile, section: Section, cols: usize) -> DisplayItem {
        let email_width = cols
            .saturating_sub(FIXED_COLUMNS_WIDTH)
            .clamp(8, EMAIL_COLUMN_WIDTH);
        let full_name = profile.full_name();
        let name = truncate_chars(&full_name, NAME_COLUMN_WIDTH);
        let name_len = name.chars().count();

        let badge = match section {
            Section::Favorites => Badge::Favorite,
            Section::Regular => Badge::Available,
            Section::Blocked => Badge::Blocked,
        };

        // Only the regular list is filtered, so only it is highlighted.
        let highlight_ranges: Vec<(usize, usize)> = if section == Section::Regular {
            search::match_range(&full_name, &self.search_query)
                .filter(|(_, end)| *end <= name_len)
                .into_iter()
                .collect()
        } else {
            vec![]
        };

        DisplayItem {
            id: profile.id.clone(),
            name,
            badge,
            gender: profile.gender.clone(),
            country: truncate_chars(&profile.address.country, 14),
            email: truncate_chars(&profile.email, email_width),
            locality: profile.locality(),
            is_selected: self.cursor.as_deref() == Some(profile.id.as_str()),
            highlight_ranges,
        }
    }

    fn compute_detail(profile: &Profile) -> DetailCard {
        let mut fields = vec![
            ("Gender", profile.gender.clone()),
            ("Age", profile.age.to_string()),
            ("Phone", profile.phone.clone()),
            ("Cell", profile.cell.clone()),
            ("Address", profile.full_address()),
        ];
        if let Some(nat) = &profile.nationality {
            fields.push(("Nationality", nat.clone()));
        }
        fields.push(("Picture", profile.picture_url.clone()));

        DetailCard {
            name: profile.titled_name(),
            email: profile.email.clone(),
            fields,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: " Profile Deck ".to_string(),
            stats: vec![
                StatBadge {
                    label: "Users",
                    value: self.store.profiles().len(),
                    kind: Badge::Available,
                },
                StatBadge {
                    label: "Favorites",
                    value: self.classification.favorite_count(),
                    kind: Badge::Favorite,
                },
                StatBadge {
                    label: "Blocked",
                    value: self.classification.blocked_count(),
                    kind: Badge::Blocked,
                },
            ],
            fetched: self.store.fetched_ago(chrono::Utc::now().timestamp()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        if self.selection.is_active() {
            return FooterInfo {
                keybindings: "Esc/Enter/q: close details  click outside: close".to_string(),
            };
        }

        let row_actions = match self.cursor_position() {
            Some((_, Section::Blocked)) => "u: unblock  Enter: details",
            Some(_) => "f: favorite  b: block  Enter: details",
            None => "",
        };

        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "Esc: exit search  Enter: results  Ctrl+u: clear  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                format!("Esc: exit search  /: edit query  j/k: navigate  {row_actions}")
            }
            InputMode::Normal => {
                format!("j/k: navigate  Tab: section  {row_actions}  /: search  q: quit")
            }
        };

        FooterInfo { keybindings }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        self.search_bar_visible().then(|| SearchBarInfo {
            query: self.search_query.clone(),
            focused: self.input_mode.is_typing(),
        })
    }

    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        if self.search_bar_visible() {
            total_rows.saturating_sub(CHROME_ROWS + SEARCH_BAR_ROWS)
        } else {
            total_rows.saturating_sub(CHROME_ROWS)
        }
    }
}
