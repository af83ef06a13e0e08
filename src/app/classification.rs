//! Favorite / blocked classification of profiles.
//!
//! Two id sets with one invariant: an id is never a favorite and blocked at
//! the same time. Every mutation goes through [`Classification::toggle_favorite`],
//! [`Classification::block`] or [`Classification::unblock`], each of which
//! preserves it.

use std::collections::HashSet;

/// Outcome of [`Classification::toggle_favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
    /// The id is blocked; favoriting it would break the mutual exclusion.
    Ignored,
}

/// Session-scoped favorite and blocked id sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    favorite_ids: HashSet<String>,
    blocked_ids: HashSet<String>,
}

impl Classification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `id` from the favorites if present, inserts it otherwise.
    ///
    /// Never touches the blocked set. Blocked ids are left alone and reported
    /// as [`FavoriteToggle::Ignored`].
    pub fn toggle_favorite(&mut self, id: &str) -> FavoriteToggle {
        if self.blocked_ids.contains(id) {
            tracing::debug!(profile_id = %id, "favorite toggle ignored for blocked profile");
            return FavoriteToggle::Ignored;
        }

        if self.favorite_ids.remove(id) {
            FavoriteToggle::Removed
        } else {
            self.favorite_ids.insert(id.to_string());
            FavoriteToggle::Added
        }
    }

    /// Blocks `id`, dropping any favorite status. Idempotent.
    pub fn block(&mut self, id: &str) {
        self.favorite_ids.remove(id);
        self.blocked_ids.insert(id.to_string());
    }

    /// Unblocks `id`. Favorite status is not restored.
    pub fn unblock(&mut self, id: &str) {
        self.blocked_ids.remove(id);
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorite_ids.contains(id)
    }

    #[must_use]
    pub fn is_blocked(&self, id: &str) -> bool {
        self.blocked_ids.contains(id)
    }

    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.favorite_ids.len()
    }

    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.blocked_ids.len()
    }

    #[must_use]
    pub const fn favorite_ids(&self) -> &HashSet<String> {
        &self.favorite_ids
    }

    #[must_use]
    pub const fn blocked_ids(&self) -> &HashSet<String> {
        &self.blocked_ids
    }
}
