//! Derived dashboard views.
//!
//! [`ProfileViews::derive`] is a pure projection of (profiles, classification,
//! query) into three disjoint lists. It keeps fetch order inside each list and
//! is re-run by [`AppState::refresh_views`](super::AppState::refresh_views)
//! after every state mutation.

use super::classification::Classification;
use super::search;
use crate::domain::Profile;

/// Dashboard section a profile is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Favorites,
    Regular,
    Blocked,
}

impl Section {
    /// Display order of the sections, top to bottom.
    pub const ALL: [Self; 3] = [Self::Favorites, Self::Regular, Self::Blocked];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Favorites => "Favorites",
            Self::Regular => "Users",
            Self::Blocked => "Blocked",
        }
    }
}

/// The three disjoint display lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileViews {
    /// Favorited and not blocked. Search is not applied.
    pub favorites: Vec<Profile>,
    /// Neither favorited nor blocked, filtered by the search query.
    pub regular: Vec<Profile>,
    /// Blocked. Search is not applied.
    pub blocked: Vec<Profile>,
}

impl ProfileViews {
    /// Computes the views for one state snapshot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use profiledeck::app::{Classification, ProfileViews};
    /// use profiledeck::domain::Profile;
    ///
    /// let ana = Profile { id: "1".into(), first: "Ana".into(), last: "Lopez".into(), ..Profile::default() };
    /// let juan = Profile { id: "2".into(), first: "Juan".into(), last: "Perez".into(), ..Profile::default() };
    ///
    /// let views = ProfileViews::derive(&[ana, juan], &Classification::new(), "ana");
    /// assert_eq!(views.regular.len(), 1);
    /// assert_eq!(views.regular[0].first, "Ana");
    /// ```
    #[must_use]
    pub fn derive(profiles: &[Profile], classification: &Classification, query: &str) -> Self {
        let _span = tracing::debug_span!(
            "derive_views",
            total_profiles = profiles.len(),
            query_len = query.len()
        )
        .entered();

        let mut views = Self::default();

        for profile in profiles {
            if classification.is_blocked(&profile.id) {
                views.blocked.push(profile.clone());
            } else if classification.is_favorite(&profile.id) {
                views.favorites.push(profile.clone());
            } else if search::matches(profile, query) {
                views.regular.push(profile.clone());
            }
        }

        tracing::debug!(
            favorites = views.favorites.len(),
            regular = views.regular.len(),
            blocked = views.blocked.len(),
            "views derived"
        );

        views
    }

    #[must_use]
    pub fn section(&self, section: Section) -> &[Profile] {
        match section {
            Section::Favorites => &self.favorites,
            Section::Regular => &self.regular,
            Section::Blocked => &self.blocked,
        }
    }

    /// Iterates every visible profile in display order with its section.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &Profile)> {
        Section::ALL
            .into_iter()
            .flat_map(move |section| self.section(section).iter().map(move |p| (section, p)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len() + self.regular.len() + self.blocked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the position of `id` in display order and its section.
    #[must_use]
    pub fn locate(&self, id: &str) -> Option<(usize, Section)> {
        self.iter()
            .enumerate()
            .find(|(_, (_, p))| p.id == id)
            .map(|(idx, (section, _))| (idx, section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn profile(id: &str, first: &str, last: &str) -> Profile {
        Profile {
            id: id.to_string(),
            first: first.to_string(),
            last: last.to_string(),
            ..Profile::default()
        }
    }

    fn roster() -> Vec<Profile> {
        vec![
            profile("p1", "Ana", "Lopez"),
            profile("p2", "Juan", "Perez"),
            profile("p3", "Sofia", "Reyes"),
            profile("p4", "John", "Doe"),
        ]
    }

    fn ids(list: &[Profile]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn views_are_pairwise_disjoint() {
        let mut c = Classification::new();
        c.toggle_favorite("p1");
        c.toggle_favorite("p3");
        c.block("p3");
        c.block("p4");

        let views = ProfileViews::derive(&roster(), &c, "");
        let fav: HashSet<_> = ids(&views.favorites).into_iter().collect();
        let reg: HashSet<_> = ids(&views.regular).into_iter().collect();
        let blk: HashSet<_> = ids(&views.blocked).into_iter().collect();

        assert!(fav.is_disjoint(&reg));
        assert!(fav.is_disjoint(&blk));
        assert!(reg.is_disjoint(&blk));
        assert_eq!(views.len(), 4);
    }

    #[test]
    fn favorited_then_blocked_only_appears_in_blocked() {
        let mut c = Classification::new();
        c.toggle_favorite("p1");
        c.block("p1");

        let views = ProfileViews::derive(&roster(), &c, "");
        assert_eq!(ids(&views.blocked), vec!["p1"]);
        assert!(views.favorites.is_empty());
        assert!(!ids(&views.regular).contains(&"p1"));
    }

    #[test]
    fn search_filters_only_regular_view() {
        let mut c = Classification::new();
        c.toggle_favorite("p2");
        c.block("p4");

        let views = ProfileViews::derive(&roster(), &c, "ana");
        assert_eq!(ids(&views.regular), vec!["p1"]);
        assert_eq!(ids(&views.favorites), vec!["p2"]);
        assert_eq!(ids(&views.blocked), vec!["p4"]);
    }

    #[test]
    fn empty_query_is_same_as_no_filter() {
        let c = Classification::new();
        let views = ProfileViews::derive(&roster(), &c, "");
        assert_eq!(ids(&views.regular), vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn fetch_order_is_preserved() {
        let mut c = Classification::new();
        c.toggle_favorite("p4");
        c.toggle_favorite("p2");

        let views = ProfileViews::derive(&roster(), &c, "");
        assert_eq!(ids(&views.favorites), vec!["p2", "p4"]);
        assert_eq!(ids(&views.regular), vec!["p1", "p3"]);
    }

    #[test]
    fn derive_is_deterministic() {
        let mut c = Classification::new();
        c.toggle_favorite("p3");
        let a = ProfileViews::derive(&roster(), &c, "o");
        let b = ProfileViews::derive(&roster(), &c, "o");
        assert_eq!(a, b);
    }

    #[test]
    fn locate_uses_display_order() {
        let mut c = Classification::new();
        c.toggle_favorite("p3");
        c.block("p1");

        let views = ProfileViews::derive(&roster(), &c, "");
        assert_eq!(views.locate("p3"), Some((0, Section::Favorites)));
        assert_eq!(views.locate("p2"), Some((1, Section::Regular)));
        assert_eq!(views.locate("p1"), Some((3, Section::Blocked)));
        assert_eq!(views.locate("missing"), None);
    }
}
