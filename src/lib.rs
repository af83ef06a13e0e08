//! Profiledeck: a Zellij plugin dashboard for randomly generated user profiles.
//!
//! Profiledeck fetches one batch of profiles from a public API and lets the
//! user:
//! - Mark profiles as favorites, block and unblock them
//! - Search the regular list by name
//! - Inspect a single profile in a detail overlay
//!
//! All state is in memory and lives as long as the plugin pane.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Classification and view derivation               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                        │
//! ┌───────────────┐                       ┌───────────────┐
//! │ UI Layer      │                       │ Provider      │
//! │ (ui/)         │                       │ (provider/)   │
//! │ - Rendering   │                       │ - Request URL │
//! │ - Theming     │                       │ - JSON decode │
//! └───────────────┘                       └───────────────┘
//!         │                                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Profile model (domain/profile)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry spans as rotating JSON lines       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/profiledeck.wasm" {
//!         endpoint "https://randomuser.me/api/"
//!         results "15"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, request the `WebAccess` permission and subscribe to
//!    key, mouse and web request events.
//! 2. **Permission Granted**: the handler emits `Action::FetchProfiles`; the
//!    shim issues the GET through the host.
//! 3. **Response**: `WebRequestResult` becomes `Event::ProfilesFetched`; the
//!    body is decoded and the store resolves, successfully or not.
//! 4. **Interaction**: keys and clicks become events; every mutation
//!    re-derives the favorites, regular and blocked lists.
//!
//! # Example
//!
//! ```rust
//! use profiledeck::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let body = r#"{"results":[{"login":{"uuid":"u1"},
//!     "name":{"title":"Ms","first":"Ana","last":"Lopez"},
//!     "email":"ana@example.com","phone":"1","cell":"2","gender":"female",
//!     "dob":{"age":30},
//!     "location":{"street":{"number":1,"name":"Main"},"city":"Lyon",
//!                 "state":"Rhône","country":"France","postcode":69001},
//!     "picture":{"large":"https://example.com/a.jpg"}}]}"#.as_bytes();
//!
//! for event in [
//!     Event::PermissionGranted,
//!     Event::ProfilesFetched { status: 200, body: body.to_vec() },
//!     Event::ToggleFavorite,
//! ] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.views.favorites.len(), 1);
//! # Ok::<(), profiledeck::ProfileDeckError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod provider;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{FetchError, Profile, ProfileDeckError, Result};
pub use ui::Theme;

use provider::{ProfileRequest, DEFAULT_BATCH_SIZE, DEFAULT_ENDPOINT};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/profiledeck.wasm" {
///     endpoint "https://randomuser.me/api/?nat=fr,es"
///     results "30"
///     theme "catppuccin-latte"
///     theme_file "~/.config/profiledeck/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Provider endpoint. Default: `https://randomuser.me/api/`
    pub endpoint: String,

    /// Number of profiles to request, clamped to `1..=5000`. Default: 15
    pub results: u32,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` refers to the host home.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: DEFAULT_BATCH_SIZE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `endpoint`: trimmed; empty falls back to the default
    /// - `results`: `u32`, falls back to 15 on parse error
    /// - `theme`, `theme_file`, `trace_level`: taken as-is
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use profiledeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("results".to_string(), "40".to_string());
    /// map.insert("theme".to_string(), "catppuccin-frappe".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.results, 40);
    /// assert_eq!(config.endpoint, "https://randomuser.me/api/");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or_else(|| DEFAULT_ENDPOINT.to_string(), String::from);

        let results = config
            .get("results")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_BATCH_SIZE);

        Self {
            endpoint,
            results,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Builds the provider request, clamping `results` into range.
    #[must_use]
    pub fn request(&self) -> ProfileRequest {
        ProfileRequest::new(self.endpoint.clone(), self.results)
    }
}

/// Creates the initial, loading `AppState` for `config`.
///
/// The theme comes from `theme_file`, then `theme`, then the default; a theme
/// that fails to load is logged and replaced by the default. Tracing is not
/// initialized here; the plugin shim does that first so this call is traced.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, results = config.results, "initializing profiledeck plugin");

    AppState::new(config.request(), load_theme(config))
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_results_fall_back_to_default() {
        let config = Config::from_zellij(&map(&[("results", "lots")]));
        assert_eq!(config.results, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn results_are_clamped_in_request() {
        let zero = Config::from_zellij(&map(&[("results", "0")]));
        assert_eq!(zero.request().batch_size(), 1);

        let huge = Config::from_zellij(&map(&[("results", "999999")]));
        assert_eq!(huge.request().batch_size(), 5000);
    }

    #[test]
    fn blank_endpoint_uses_default() {
        let config = Config::from_zellij(&map(&[("endpoint", "   ")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn theme_file_takes_precedence_and_falls_back() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "/definitely/missing.toml"),
        ]));
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn named_theme_is_loaded() {
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-latte")]));
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");

        let unknown = Config::from_zellij(&map(&[("theme", "nope")]));
        assert_eq!(initialize(&unknown).theme.name, "catppuccin-mocha");
    }
}
