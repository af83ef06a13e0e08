//! Case-insensitive substring search over profile names.

use crate::domain::Profile;

/// Returns `true` if the profile's full name contains `query`, ignoring case.
///
/// An empty query matches every profile.
///
/// # Example
///
/// ```rust
/// use profiledeck::app::search::matches;
/// use profiledeck::domain::Profile;
///
/// let ana = Profile { first: "Ana".into(), last: "Lopez".into(), ..Profile::default() };
/// assert!(matches(&ana, "ana"));
/// assert!(matches(&ana, "A L"));
/// assert!(!matches(&ana, "juan"));
/// ```
#[must_use]
pub fn matches(profile: &Profile, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    profile
        .full_name()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Finds the first case-insensitive occurrence of `query` in `text`.
///
/// Returns a `(start, end)` range in character indices (exclusive end) for
/// highlighting. `None` for an empty query or no match.
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

    // Lowercasing can change the char count (e.g. 'İ'); ranges would no longer
    // line up with `text`, so skip highlighting in that case.
    if haystack.len() != text.chars().count() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| (start, start + needle.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(first: &str, last: &str) -> Profile {
        Profile {
            first: first.to_string(),
            last: last.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches(&named("Ana", "Lopez"), ""));
        assert!(matches(&named("", ""), ""));
    }

    #[test]
    fn match_spans_first_and_last_name() {
        assert!(matches(&named("Ana", "Lopez"), "na lo"));
        assert!(!matches(&named("Ana", "Lopez"), "analopez"));
    }

    #[test]
    fn match_is_case_insensitive_both_ways() {
        assert!(matches(&named("ana", "lopez"), "LOPEZ"));
        assert!(matches(&named("JOSÉ", "MARÍN"), "josé"));
    }

    #[test]
    fn match_range_reports_char_indices() {
        assert_eq!(match_range("Ana Lopez", "lop"), Some((4, 7)));
        assert_eq!(match_range("José Marín", "mar"), Some((5, 8)));
        assert_eq!(match_range("Ana Lopez", "zz"), None);
        assert_eq!(match_range("Ana Lopez", ""), None);
    }
}
