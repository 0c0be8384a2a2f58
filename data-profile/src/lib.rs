//! # Data Profile
//!
//! `data-profile` defines the directory's record types: the [`Profile`]
//! entity, its opaque identifier [`ProfileId`], and the value types carried
//! by a profile ([`GeoPoint`], [`Socials`]).
//!
//! Input shapes live in [`draft`]: [`ProfileDraft`] for creation (no id, no
//! location — both are derived) and [`ProfilePatch`] for partial updates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use data_error::{DirectoryError, Result};

mod draft;
pub mod samples;

pub use draft::{ProfileDraft, ProfilePatch};

/// Image reference used when a profile is created without one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Opaque unique identifier of a [`Profile`].
///
/// Assigned once at creation and immutable afterwards. Freshly generated ids
/// are UUIDs, so an id is never reused even after its profile is deleted.
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Generate a fresh identifier.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProfileId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ProfileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A geographic coordinate derived from a profile's address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Social platform handles attached to a profile.
///
/// Every platform is optional; an all-empty value means the profile has no
/// social links and is skipped during serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl Socials {
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none() && self.linkedin.is_none() && self.facebook.is_none()
    }
}

/// One directory record.
///
/// `id` and `location` are owned by the store: the id is generated at
/// creation time and the location is whatever the geocoder last resolved for
/// the current `address` (absent when geocoding failed or has not run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    #[serde(default = "default_image")]
    pub image: String,
    pub description: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Free-text tags, kept in the order they were entered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Socials::is_empty")]
    pub socials: Socials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_owned()
}

impl Profile {
    /// Check the required fields (`name`, `description`, `address`).
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.description, "description")?;
        require(&self.address, "address")
    }
}

pub(crate) fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidProfile(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        let a = ProfileId::fresh();
        let b = ProfileId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn absent_fields_are_skipped_in_json() {
        let profile = Profile {
            id: "p1".into(),
            name: "Ada".to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            description: "Engineer".to_owned(),
            address: "1 Analytical Way".to_owned(),
            email: None,
            phone: None,
            profession: None,
            city: None,
            interests: vec![],
            socials: Socials::default(),
            location: None,
        };

        let json = serde_json::to_value(&profile).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("email"));
        assert!(!object.contains_key("interests"));
        assert!(!object.contains_key("socials"));
        assert!(!object.contains_key("location"));
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let mut profile = samples::samples().remove(0);
        profile.name = "   ".to_owned();
        assert!(matches!(
            profile.validate(),
            Err(DirectoryError::InvalidProfile(_))
        ));
    }
}
