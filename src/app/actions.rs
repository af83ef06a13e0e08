//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the Zellij host directly. It returns a
//! `Vec<Action>` after each event and the shim in `main.rs` executes them in
//! order, keeping every state transition testable without a host.
//!
//! # Example
//!
//! ```rust
//! use profiledeck::app::Action;
//!
//! let actions = vec![Action::FetchProfiles {
//!     url: "https://randomuser.me/api/?results=15".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues the one-shot GET request for the profile batch.
    ///
    /// The host answers with a `WebRequestResult` that the shim turns into
    /// [`Event::ProfilesFetched`](crate::app::Event::ProfilesFetched).
    FetchProfiles {
        /// Fully built request URL.
        url: String,
    },

    /// Hides the plugin pane.
    CloseFocus,
}
