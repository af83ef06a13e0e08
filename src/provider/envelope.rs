//! Wire types for the provider's JSON envelope and their conversion to
//! domain [`Profile`]s.
//!
//! The provider nests most fields (`name.first`, `location.street.number`,
//! `dob.age`, ...). These records mirror that shape and are flattened into the
//! domain model by [`RawProfile::into_profile`], keeping the wire format out of
//! the rest of the crate.

use crate::domain::{Address, FetchError, Profile};
use serde::Deserialize;
use std::fmt;

/// Top-level response body: `{ "results": [...], "info": {...} }`.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub results: Vec<RawProfile>,
    #[serde(default)]
    pub info: Option<EnvelopeInfo>,
}

/// Batch metadata echoed back by the provider.
#[derive(Debug, Deserialize)]
pub struct EnvelopeInfo {
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub results: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RawProfile {
    pub login: RawLogin,
    pub name: RawName,
    pub email: String,
    pub phone: String,
    pub cell: String,
    pub gender: String,
    pub dob: RawDob,
    pub location: RawLocation,
    pub picture: RawPicture,
    #[serde(default)]
    pub nat: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawLogin {
    pub uuid: String,
}

#[derive(Debug, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Deserialize)]
pub struct RawDob {
    pub age: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawLocation {
    pub street: RawStreet,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
}

#[derive(Debug, Deserialize)]
pub struct RawStreet {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RawPicture {
    pub large: String,
}

/// The provider emits postcodes as numbers for some nationalities and as
/// strings for others.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(i64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl RawProfile {
    /// Flattens the wire record into a domain profile.
    #[must_use]
    pub fn into_profile(self) -> Profile {
        Profile {
            id: self.login.uuid,
            title: self.name.title,
            first: self.name.first,
            last: self.name.last,
            email: self.email,
            phone: self.phone,
            cell: self.cell,
            gender: self.gender,
            age: self.dob.age,
            address: Address {
                street_number: self.location.street.number,
                street_name: self.location.street.name,
                city: self.location.city,
                state: self.location.state,
                country: self.location.country,
                postcode: self.location.postcode.to_string(),
            },
            picture_url: self.picture.large,
            nationality: self.nat,
        }
    }
}

/// Decodes a provider response into profiles, preserving fetch order.
///
/// # Errors
///
/// - [`FetchError::Status`] if `status` is outside `200..300`
/// - [`FetchError::Decode`] if the body is not a valid envelope
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<Profile>, FetchError> {
    if !(200..300).contains(&status) {
        tracing::debug!(
            status = status,
            body = %String::from_utf8_lossy(body),
            "provider returned non-success status"
        );
        return Err(FetchError::Status { status });
    }

    let envelope: Envelope = serde_json::from_slice(body)?;

    if let Some(info) = &envelope.info {
        tracing::debug!(seed = ?info.seed, requested = ?info.results, "provider batch info");
    }

    Ok(envelope
        .results
        .into_iter()
        .map(RawProfile::into_profile)
        .collect())
}
