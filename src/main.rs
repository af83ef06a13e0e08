//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Profiledeck library and the Zellij
//! plugin system: it translates host events into library [`Event`]s and
//! library [`Action`]s into host calls. All behavior lives in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; the grant triggers the fetch
//! 3. **Subscribe**: Key, Mouse, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to `handle_event`, execute actions
//! 5. **Render**: Record the pane size, then call the library renderer
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//! - `Ctrl+u`: Clear the search query
//!
//! Normal mode and search results:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Tab` / `Shift+Tab`: Next / previous section
//! - `f`: Toggle favorite, `b`: Block, `u`: Unblock
//! - `Enter`: Show details
//! - `/`: Edit search query
//! - `Esc`: Leave search or clear query
//! - `q`: Close plugin
//!
//! Typing a search query:
//! - Characters: Append to query
//! - `Enter`: Focus results
//! - `Esc`: Exit search
//!
//! Detail overlay:
//! - `Esc`, `Enter`, `q` or a click outside the box: Close

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use profiledeck::{handle_event, Action, Config, Event};

/// Context attached to the profile request so its result can be recognized.
#[cfg(target_family = "wasm")]
const REQUEST_CONTEXT: (&str, &str) = ("request", "profiles");

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
#[cfg(target_family = "wasm")]
struct State {
    app: profiledeck::AppState,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: profiledeck::initialize(&Config::default()),
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, requests web
    /// access and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        profiledeck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = profiledeck::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if context.get(REQUEST_CONTEXT.0).map(String::as_str) != Some(REQUEST_CONTEXT.1) {
                    tracing::debug!(context = ?context, "ignoring unrelated web request result");
                    return false;
                }
                Event::ProfilesFetched { status, body }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionGranted,
                PermissionStatus::Denied => Event::PermissionDenied,
            },
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Records the pane size for click hit-testing, then renders.
    fn render(&mut self, rows: usize, cols: usize) {
        self.dispatch(&Event::Resize { rows, cols });
        profiledeck::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('u') => Some(Event::ClearSearch),
                _ => None,
            };
        }

        if self.app.selection.is_active() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::Dismiss),
                _ => None,
            };
        }

        if self.app.input_mode.is_typing() {
            return Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevSection,
            BareKey::Tab => Event::NextSection,
            BareKey::Char('f') => Event::ToggleFavorite,
            BareKey::Char('b') => Event::Block,
            BareKey::Char('u') => Event::Unblock,
            BareKey::Enter => Event::ShowDetails,
            BareKey::Esc => Event::Dismiss,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a left click to a 1-indexed cell; other mouse events are ignored.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                Some(Event::Click { row, col: col + 1 })
            }
            _ => None,
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::FetchProfiles { url } => {
                tracing::debug!(url = %url, "issuing web request");
                let context = BTreeMap::from([(
                    REQUEST_CONTEXT.0.to_string(),
                    REQUEST_CONTEXT.1.to_string(),
                )]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}

/// Profiledeck only runs inside Zellij; the native binary just says so.
#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "profiledeck {} is a Zellij plugin; build it with `--target wasm32-wasip1` and load the .wasm from a layout",
        env!("CARGO_PKG_VERSION")
    );
}
