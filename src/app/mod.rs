//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the domain, provider and UI
//! layers.
//!
//! ```text
//! Host/User Input → Events → Event Handler → State Mutations → Actions → Host
//!                                                 ↓
//!                                    refresh_views → compute_viewmodel
//! ```
//!
//! # Modules
//!
//! - [`store`]: Fetched profiles and load status
//! - [`classification`]: Mutually exclusive favorite / blocked sets
//! - [`search`]: Name search predicate
//! - [`views`]: Derivation of the three display lists
//! - [`selection`]: Detail overlay selection
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use profiledeck::app::{handle_event, AppState, Event};
//! use profiledeck::provider::ProfileRequest;
//! use profiledeck::ui::Theme;
//!
//! let mut state = AppState::new(ProfileRequest::default(), Theme::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! # Ok::<(), profiledeck::ProfileDeckError>(())
//! ```

pub mod actions;
pub mod classification;
pub mod handler;
pub mod modes;
pub mod search;
pub mod selection;
pub mod state;
pub mod store;
pub mod views;

pub use actions::Action;
pub use classification::{Classification, FavoriteToggle};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use selection::Selection;
pub use state::AppState;
pub use store::{LoadStatus, ProfileStore};
pub use views::{ProfileViews, Section};
