//! Error types for the Profiledeck plugin.
//!
//! This module defines the centralized error type [`ProfileDeckError`], the
//! fetch-specific [`FetchError`], and a [`Result`] alias used throughout the
//! crate. All errors derive their `Error` implementations with `thiserror`.

use thiserror::Error;

/// Reasons the initial profile load can fail.
///
/// Every variant collapses to the same user-visible outcome (an empty
/// dashboard), but the distinction is kept for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered with a non-success HTTP status.
    ///
    /// Zellij also reports transport failures (DNS, TLS, refused connection)
    /// through a non-success status, so this covers network errors too.
    #[error("provider returned HTTP status {status}")]
    Status {
        /// HTTP status code reported by the host.
        status: u16,
    },

    /// The response body was not a valid profile envelope.
    #[error("malformed provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The user refused the web access permission, so no request was made.
    #[error("web access permission denied")]
    PermissionDenied,
}

/// The main error type for Profiledeck operations.
///
/// # Examples
///
/// ```
/// use profiledeck::domain::{FetchError, ProfileDeckError};
///
/// let err = ProfileDeckError::from(FetchError::Status { status: 503 });
/// assert_eq!(err.to_string(), "Fetch error: provider returned HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum ProfileDeckError {
    /// Loading profiles from the provider failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Profiledeck operations.
pub type Result<T> = std::result::Result<T, ProfileDeckError>;
