//! Remote profile provider.
//!
//! The provider is an opaque HTTP endpoint returning a JSON envelope whose
//! `results` field is a list of profile records. The plugin never performs
//! I/O itself: it emits an [`Action::FetchProfiles`](crate::app::Action) with the
//! URL from [`ProfileRequest::url`], the Zellij host runs the request, and the
//! response bytes come back through [`decode_response`].
//!
//! # Modules
//!
//! - `request`: URL construction and batch size limits
//! - `envelope`: Wire types and decoding into domain profiles

pub mod envelope;
pub mod request;

pub use envelope::decode_response;
pub use request::{ProfileRequest, DEFAULT_BATCH_SIZE, DEFAULT_ENDPOINT, MAX_BATCH_SIZE};
