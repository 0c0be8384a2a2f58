use serde::{Deserialize, Serialize};

use data_error::Result;

use crate::{require, GeoPoint, Profile, ProfileId, Socials, PLACEHOLDER_IMAGE};

/// Input for creating a profile.
///
/// Carries everything a [`Profile`] has except the id and the location;
/// the store derives both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
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
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Socials::is_empty")]
    pub socials: Socials,
}

impl ProfileDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image: None,
            description: description.into(),
            address: address.into(),
            email: None,
            phone: None,
            profession: None,
            city: None,
            interests: vec![],
            socials: Socials::default(),
        }
    }

    /// Check the required fields (`name`, `description`, `address`).
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.description, "description")?;
        require(&self.address, "address")
    }

    /// Assemble the final record from a store-assigned id and an optional
    /// geocoding result. A missing image falls back to the placeholder.
    pub fn into_profile(self, id: ProfileId, location: Option<GeoPoint>) -> Profile {
        Profile {
            id,
            name: self.name,
            image: self
                .image
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            description: self.description,
            address: self.address,
            email: self.email,
            phone: self.phone,
            profession: self.profession,
            city: self.city,
            interests: self.interests,
            socials: self.socials,
            location,
        }
    }
}

/// Partial update of a profile.
///
/// Absent fields leave the record untouched; present fields replace the
/// previous value wholesale (`interests` and `socials` included). The id is
/// immutable and the location is recomputed by the store whenever `address`
/// is present, so neither can be patched directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socials: Option<Socials>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.profession.is_none()
            && self.city.is_none()
            && self.interests.is_none()
            && self.socials.is_none()
    }

    /// Merge the patch into `profile`, shallowly. Does not touch `id` or
    /// `location`.
    pub fn apply(&self, profile: &mut Profile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(image) = &self.image {
            profile.image = image.clone();
        }
        if let Some(description) = &self.description {
            profile.description = description.clone();
        }
        if let Some(address) = &self.address {
            profile.address = address.clone();
        }
        if let Some(email) = &self.email {
            profile.email = Some(email.clone());
        }
        if let Some(phone) = &self.phone {
            profile.phone = Some(phone.clone());
        }
        if let Some(profession) = &self.profession {
            profile.profession = Some(profession.clone());
        }
        if let Some(city) = &self.city {
            profile.city = Some(city.clone());
        }
        if let Some(interests) = &self.interests {
            profile.interests = interests.clone();
        }
        if let Some(socials) = &self.socials {
            profile.socials = socials.clone();
        }
    }
}
