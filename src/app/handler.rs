//! Event handling and state transition logic.
//!
//! The handler translates discrete events (keys, clicks, host callbacks) into
//! state mutations and side-effect [`Action`]s. It never calls the host
//! directly, so every transition can be exercised in tests.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextSection`, `PrevSection`
//! - **Classification**: `ToggleFavorite`, `Block`, `Unblock`
//! - **Detail overlay**: `ShowDetails`, `Dismiss`, `Click`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `ClearSearch`,
//!   `FocusResults`, `ExitSearch`
//! - **Host**: `PermissionGranted`, `PermissionDenied`, `ProfilesFetched`,
//!   `Resize`, `CloseFocus`
//!
//! While the detail overlay is open only dismissal, host callbacks and
//! `CloseFocus` are processed; everything else is ignored.
//!
//! # Example
//!
//! ```rust
//! use profiledeck::app::{handle_event, Action, AppState, Event};
//! use profiledeck::provider::ProfileRequest;
//! use profiledeck::ui::Theme;
//!
//! let mut state = AppState::new(ProfileRequest::default(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionGranted)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchProfiles { .. }]));
//! # Ok::<(), profiledeck::ProfileDeckError>(())
//! ```

use super::classification::FavoriteToggle;
use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::FetchError;
use crate::provider::decode_response;
use crate::ui::components::detail_bounds;

/// Events triggered by user input or the plugin host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one row (wraps to top).
    KeyDown,
    /// Moves the cursor up one row (wraps to bottom).
    KeyUp,
    /// Jumps to the first row of the next non-empty section.
    NextSection,
    /// Jumps to the first row of the previous non-empty section.
    PrevSection,

    /// Toggles favorite on the cursor profile.
    ToggleFavorite,
    /// Blocks the cursor profile.
    Block,
    /// Unblocks the cursor profile.
    Unblock,

    /// Opens the detail overlay for the cursor profile.
    ShowDetails,
    /// Closes the overlay; without one, leaves search or clears the query.
    Dismiss,
    /// Left click at a 1-indexed cell.
    Click { row: usize, col: usize },

    /// Enters search mode with typing focus, keeping any applied query.
    SearchMode,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Empties the query.
    ClearSearch,
    /// Moves focus from the query to the filtered results.
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,

    /// Hides the plugin pane.
    CloseFocus,

    /// The host granted web access.
    PermissionGranted,
    /// The host (or user) refused web access.
    PermissionDenied,
    /// The host finished the profile request.
    ProfilesFetched {
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },
    /// The pane was resized.
    Resize { rows: usize, cols: usize },
}

impl Event {
    /// Whether the event is processed while the detail overlay is open.
    const fn passes_overlay(&self) -> bool {
        matches!(
            self,
            Self::Dismiss
                | Self::Click { .. }
                | Self::CloseFocus
                | Self::PermissionGranted
                | Self::PermissionDenied
                | Self::ProfilesFetched { .. }
                | Self::Resize { .. }
        )
    }
}

/// Processes an event, mutates state and returns `(should_render, actions)`.
///
/// # Errors
///
/// Reserved for failures the plugin cannot absorb. Fetch problems are not
/// errors here: they resolve the store to an empty, failed load.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    if state.selection.is_active() && !event.passes_overlay() {
        tracing::debug!("detail overlay open, event ignored");
        return Ok((false, vec![]));
    }

    match event {
        Event::KeyDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::NextSection => {
            state.jump_section(true);
            Ok((true, vec![]))
        }
        Event::PrevSection => {
            state.jump_section(false);
            Ok((true, vec![]))
        }
        Event::ToggleFavorite => {
            let changed = matches!(
                state.toggle_favorite_at_cursor(),
                Some(FavoriteToggle::Added | FavoriteToggle::Removed)
            );
            Ok((changed, vec![]))
        }
        Event::Block => Ok((state.block_at_cursor(), vec![])),
        Event::Unblock => Ok((state.unblock_at_cursor(), vec![])),
        Event::ShowDetails => Ok((state.show_cursor_details(), vec![])),
        Event::Dismiss => {
            if state.selection.clear() {
                tracing::debug!("detail overlay closed");
                return Ok((true, vec![]));
            }
            if state.input_mode.is_search() {
                exit_search(state);
                return Ok((true, vec![]));
            }
            if !state.search_query.is_empty() {
                state.set_search_query(String::new());
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Click { row, col } => {
            if !state.selection.is_active() {
                return Ok((false, vec![]));
            }
            let (rows, cols) = state.viewport;
            if detail_bounds(rows, cols).contains(*row, *col) {
                return Ok((false, vec![]));
            }
            tracing::debug!(row, col, "click outside detail overlay");
            state.selection.clear();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }
            let mut query = std::mem::take(&mut state.search_query);
            query.push(*c);
            tracing::trace!(query = %query, "search query updated");
            state.set_search_query(query);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_typing() || state.search_query.is_empty() {
                return Ok((false, vec![]));
            }
            let mut query = std::mem::take(&mut state.search_query);
            query.pop();
            state.set_search_query(query);
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            if state.search_query.is_empty() {
                return Ok((false, vec![]));
            }
            state.set_search_query(String::new());
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            exit_search(state);
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionGranted => {
            if state.fetch_requested {
                tracing::debug!("fetch already requested, ignoring permission grant");
                return Ok((false, vec![]));
            }
            state.fetch_requested = true;
            let url = state.request.url();
            tracing::info!(url = %url, "requesting profiles");
            Ok((false, vec![Action::FetchProfiles { url }]))
        }
        Event::PermissionDenied => {
            tracing::warn!("web access permission denied");
            Ok((state.load_profiles(Err(FetchError::PermissionDenied)), vec![]))
        }
        Event::ProfilesFetched { status, body } => {
            tracing::debug!(status, body_len = body.len(), "profile response received");
            let result = decode_response(*status, body);
            Ok((state.load_profiles(result), vec![]))
        }
        Event::Resize { rows, cols } => {
            let changed = state.viewport != (*rows, *cols);
            state.viewport = (*rows, *cols);
            Ok((changed, vec![]))
        }
    }
}

fn exit_search(state: &mut AppState) {
    tracing::debug!(query = %state.search_query, "exiting search mode");
    state.input_mode = InputMode::Normal;
    state.set_search_query(String::new());
}

/// Debug view of an event that leaves out response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::ProfilesFetched { status, body } => f
                .debug_struct("ProfilesFetched")
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => write!(f, "{other:?}"),
        }
    }
}
