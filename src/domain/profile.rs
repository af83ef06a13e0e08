//! Profile domain model.
//!
//! A [`Profile`] is one user record fetched from the provider. Profiles are
//! immutable once fetched and owned by the profile store; every other
//! component refers to them by [`Profile::id`].

/// Postal address of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street_number: u32,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Kept as text: some countries use alphanumeric postcodes.
    pub postcode: String,
}

/// A fetched user profile.
///
/// # Fields
///
/// - `id`: Stable unique identifier (the provider's login UUID)
/// - `title`, `first`, `last`: Display name parts
/// - `email`, `phone`, `cell`: Contact fields
/// - `gender`, `age`: Demographic fields
/// - `address`: Postal address
/// - `picture_url`: Large portrait URL
/// - `nationality`: Optional two-letter nationality code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub title: String,
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
    pub cell: String,
    pub gender: String,
    pub age: u32,
    pub address: Address,
    pub picture_url: String,
    pub nationality: Option<String>,
}

impl Profile {
    /// Returns `"{first} {last}"`, the text the search filter matches against.
    ///
    /// # Examples
    ///
    /// ```
    /// use profiledeck::domain::Profile;
    ///
    /// let profile = Profile {
    ///     first: "Juan".to_string(),
    ///     last: "Perez".to_string(),
    ///     ..Profile::default()
    /// };
    /// assert_eq!(profile.full_name(), "Juan Perez");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Returns the single-line address shown in the detail overlay.
    ///
    /// Format: `"{number} {street}, {city}, {state}, {country} {postcode}"`.
    #[must_use]
    pub fn full_address(&self) -> String {
        let a = &self.address;
        format!(
            "{} {}, {}, {}, {} {}",
            a.street_number, a.street_name, a.city, a.state, a.country, a.postcode
        )
    }

    /// Returns the name with its courtesy title, as shown on the detail card.
    ///
    /// ```
    /// use profiledeck::domain::Profile;
    ///
    /// let profile = Profile {
    ///     title: "Ms".to_string(),
    ///     first: "Ana".to_string(),
    ///     last: "Lopez".to_string(),
    ///     ..Profile::default()
    /// };
    /// assert_eq!(profile.titled_name(), "Ms Ana Lopez");
    /// ```
    #[must_use]
    pub fn titled_name(&self) -> String {
        if self.title.is_empty() {
            self.full_name()
        } else {
            format!("{} {}", self.title, self.full_name())
        }
    }

    /// Returns `"{city}, {state}"` for the compact row layout.
    #[must_use]
    pub fn locality(&self) -> String {
        format!("{}, {}", self.address.city, self.address.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile {
            id: "id-1".to_string(),
            first: "Ana".to_string(),
            last: "Lopez".to_string(),
            address: Address {
                street_number: 4821,
                street_name: "Calle de Alcalá".to_string(),
                city: "Valencia".to_string(),
                state: "Galicia".to_string(),
                country: "Spain".to_string(),
                postcode: "38715".to_string(),
            },
            ..Profile::default()
        }
    }

    #[test]
    fn full_address_matches_overlay_format() {
        assert_eq!(
            sample().full_address(),
            "4821 Calle de Alcalá, Valencia, Galicia, Spain 38715"
        );
    }

    #[test]
    fn titled_name_skips_missing_title() {
        let mut profile = sample();
        assert_eq!(profile.titled_name(), "Ana Lopez");

        profile.title = "Mrs".to_string();
        assert_eq!(profile.titled_name(), "Mrs Ana Lopez");
    }

    #[test]
    fn locality_joins_city_and_state() {
        assert_eq!(sample().locality(), "Valencia, Galicia");
    }
}
