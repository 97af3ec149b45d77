//! Profile domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned profile identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProfileId(pub u32);

impl ProfileId {
    /// The id handed out by an empty store.
    pub const FIRST: ProfileId = ProfileId(1);

    pub fn get(self) -> u32 {
        self.0
    }

    /// The id following this one, `None` past `u32::MAX`.
    pub fn next(self) -> Option<ProfileId> {
        self.0.checked_add(1).map(ProfileId)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProfileId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(ProfileId)
    }
}

impl From<u32> for ProfileId {
    fn from(value: u32) -> Self {
        ProfileId(value)
    }
}

/// Geographic position as (longitude, latitude).
///
/// Serialized as a `[longitude, latitude]` pair. The default (0, 0) is a
/// valid value and is kept as-is through form edits.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(c: Coordinates) -> Self {
        (c.longitude, c.latitude)
    }
}

/// Street address with map position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub coordinates: Coordinates,
}

/// Optional social handles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none() && self.linkedin.is_none() && self.github.is_none()
    }
}

/// A directory record: a person with contact details and a located address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    /// Avatar image URL
    pub avatar: String,
    pub bio: String,
    pub address: Address,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}

impl Profile {
    /// Attaches a store-assigned id to a draft.
    pub fn from_draft(id: ProfileId, draft: ProfileDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            avatar: draft.avatar,
            bio: draft.bio,
            address: draft.address,
            interests: draft.interests,
            phone: draft.phone,
            website: draft.website,
            social: draft.social,
        }
    }

    /// Returns the profile's data without its id.
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
            bio: self.bio.clone(),
            address: self.address.clone(),
            interests: self.interests.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
            social: self.social.clone(),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.address.coordinates
    }
}

/// Profile data without an id, as submitted by the admin form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    pub address: Address,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}
