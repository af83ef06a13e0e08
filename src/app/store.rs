//! Profile store: the fetched profile list and its load status.
//!
//! The store is populated at most once per session. The first completion,
//! successful or not, resolves the loading state; anything after that is a
//! duplicate host response and is ignored.

use crate::domain::{FetchError, Profile};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Progress of the one-shot profile load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The request is in flight (or waiting for permission).
    Loading,
    /// Profiles arrived; `fetched_at` is a Unix timestamp.
    Loaded { fetched_at: i64 },
    /// The load failed; the store stays empty.
    Failed { reason: String },
}

/// Holds the profiles returned by the provider, in fetch order.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    status: LoadStatus,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            profiles: Vec::new(),
            status: LoadStatus::Loading,
        }
    }

    /// Applies the result of the initial fetch.
    ///
    /// Returns `true` if the result was applied, `false` if the store had
    /// already been resolved and the result was discarded.
    pub fn complete(&mut self, result: Result<Vec<Profile>, FetchError>) -> bool {
        if !self.is_loading() {
            tracing::debug!(status = ?self.status, "profile store already resolved, ignoring result");
            return false;
        }

        match result {
            Ok(profiles) => {
                tracing::debug!(profile_count = profiles.len(), "profile store loaded");
                self.profiles = profiles;
                self.status = LoadStatus::Loaded {
                    fetched_at: chrono::Utc::now().timestamp(),
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile fetch failed");
                self.profiles.clear();
                self.status = LoadStatus::Failed {
                    reason: e.to_string(),
                };
            }
        }
        true
    }

    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Returns a human-readable age of the loaded batch ("just now", "5m ago").
    ///
    /// `None` unless the store is [`LoadStatus::Loaded`].
    #[must_use]
    pub fn fetched_ago(&self, now: i64) -> Option<String> {
        let LoadStatus::Loaded { fetched_at } = self.status else {
            return None;
        };
        let diff = now - fetched_at;

        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn starts_loading_and_empty() {
        let store = ProfileStore::new();
        assert!(store.is_loading());
        assert!(store.profiles().is_empty());
    }

    #[test]
    fn success_replaces_contents() {
        let mut store = ProfileStore::new();
        assert!(store.complete(Ok(vec![profile("a"), profile("b")])));

        assert!(matches!(store.status(), LoadStatus::Loaded { .. }));
        assert_eq!(store.profiles().len(), 2);
        assert_eq!(store.get("b").map(|p| p.id.as_str()), Some("b"));
    }

    #[test]
    fn failure_leaves_store_empty_and_resolved() {
        let mut store = ProfileStore::new();
        assert!(store.complete(Err(FetchError::Status { status: 500 })));

        assert!(!store.is_loading());
        assert!(store.profiles().is_empty());
        assert!(matches!(store.status(), LoadStatus::Failed { .. }));
    }

    #[test]
    fn second_completion_is_ignored() {
        let mut store = ProfileStore::new();
        store.complete(Ok(vec![profile("a")]));

        assert!(!store.complete(Ok(vec![profile("x"), profile("y")])));
        assert!(!store.complete(Err(FetchError::PermissionDenied)));
        assert_eq!(store.profiles().len(), 1);
        assert!(matches!(store.status(), LoadStatus::Loaded { .. }));
    }

    #[test]
    fn fetched_ago_formats_elapsed_time() {
        let mut store = ProfileStore::new();
        assert_eq!(store.fetched_ago(0), None);

        store.status = LoadStatus::Loaded { fetched_at: 1_000 };
        assert_eq!(store.fetched_ago(1_030).as_deref(), Some("just now"));
        assert_eq!(store.fetched_ago(1_300).as_deref(), Some("5m ago"));
        assert_eq!(store.fetched_ago(1_000 + 3 * 3600).as_deref(), Some("3h ago"));
        assert_eq!(store.fetched_ago(1_000 + 2 * 86400).as_deref(), Some("2d ago"));
    }
}
