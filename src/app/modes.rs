//! Input mode state types for the application.
//!
//! The dashboard is either in normal navigation mode or editing/navigating a
//! name search. The mode decides how keys are interpreted by the plugin shim
//! and which hints the footer shows.
//!
//! # Example
//!
//! ```rust
//! use profiledeck::app::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert!(mode.is_search());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys are typed into the query.
    Typing,

    /// Keys navigate and act on the filtered dashboard while the query stays
    /// applied.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and classification keys are active.
    Normal,

    /// Search mode with a [`SearchFocus`].
    Search(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    /// `true` when printable keys should be appended to the query.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}
