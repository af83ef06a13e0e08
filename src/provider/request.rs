//! Request description for the profile provider.

/// Endpoint used when the plugin configuration does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Batch size used when the plugin configuration does not override it.
pub const DEFAULT_BATCH_SIZE: u32 = 15;

/// Largest batch the provider accepts in one request.
pub const MAX_BATCH_SIZE: u32 = 5000;

/// A one-shot request for a fixed-size batch of profiles.
///
/// # Example
///
/// ```rust
/// use profiledeck::provider::ProfileRequest;
///
/// let request = ProfileRequest::new("https://randomuser.me/api/", 15);
/// assert_eq!(request.url(), "https://randomuser.me/api/?results=15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    endpoint: String,
    batch_size: u32,
}

impl ProfileRequest {
    /// Creates a request, clamping `batch_size` to `1..=MAX_BATCH_SIZE`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, batch_size: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            batch_size: batch_size.clamp(1, MAX_BATCH_SIZE),
        }
    }

    #[must_use]
    pub const fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// Builds the full request URL, appending `results` to any existing query.
    #[must_use]
    pub fn url(&self) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{separator}results={}", self.endpoint, self.batch_size)
    }
}

impl Default for ProfileRequest {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_BATCH_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_targets_fixed_batch() {
        assert_eq!(
            ProfileRequest::default().url(),
            "https://randomuser.me/api/?results=15"
        );
    }

    #[test]
    fn existing_query_gets_ampersand() {
        let request = ProfileRequest::new("https://randomuser.me/api/?nat=es", 3);
        assert_eq!(request.url(), "https://randomuser.me/api/?nat=es&results=3");
    }

    #[test]
    fn batch_size_is_clamped() {
        assert_eq!(ProfileRequest::new(DEFAULT_ENDPOINT, 0).batch_size(), 1);
        assert_eq!(
            ProfileRequest::new(DEFAULT_ENDPOINT, 100_000).batch_size(),
            MAX_BATCH_SIZE
        );
    }
}
