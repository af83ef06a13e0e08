//! Domain layer for the Profiledeck plugin.
//!
//! Core types that are independent of the Zellij host and of the provider's
//! wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`profile`]: The immutable user profile record
//!
//! # Examples
//!
//! ```
//! use profiledeck::domain::{Address, Profile};
//!
//! let profile = Profile {
//!     id: "p1".to_string(),
//!     first: "Ana".to_string(),
//!     last: "Lopez".to_string(),
//!     ..Profile::default()
//! };
//! assert_eq!(profile.full_name(), "Ana Lopez");
//! assert_eq!(profile.address, Address::default());
//! ```

pub mod error;
pub mod profile;

pub use error::{FetchError, ProfileDeckError, Result};
pub use profile::{Address, Profile};
