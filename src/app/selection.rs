//! Detail overlay selection.

use crate::domain::Profile;

/// At most one profile opened in the detail overlay.
///
/// Selecting replaces any previous selection; there is no stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<Profile>,
}

impl Selection {
    pub fn select(&mut self, profile: Profile) {
        tracing::debug!(profile_id = %profile.id, "profile selected for details");
        self.current = Some(profile);
    }

    /// Clears the selection. Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Profile> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.current.is_some()
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
    fn select_replaces_previous() {
        let mut selection = Selection::default();
        selection.select(profile("p2"));
        selection.select(profile("p3"));

        assert_eq!(selection.current().map(|p| p.id.as_str()), Some("p3"));
    }

    #[test]
    fn clear_reports_whether_anything_was_open() {
        let mut selection = Selection::default();
        assert!(!selection.clear());

        selection.select(profile("p1"));
        assert!(selection.clear());
        assert!(!selection.is_active());
    }
}
