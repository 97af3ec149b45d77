//! Form field identifiers.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Text fields of the profile form.
///
/// The string form is the key used in [`super::ValidationErrors`] and matches
/// the `name` attribute a web shell would give its inputs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
pub enum FormField {
    #[strum(serialize = "name")]
    #[serde(rename = "name")]
    Name,
    #[strum(serialize = "email")]
    #[serde(rename = "email")]
    Email,
    #[strum(serialize = "avatar")]
    #[serde(rename = "avatar")]
    Avatar,
    #[strum(serialize = "bio")]
    #[serde(rename = "bio")]
    Bio,
    #[strum(serialize = "phone")]
    #[serde(rename = "phone")]
    Phone,
    #[strum(serialize = "website")]
    #[serde(rename = "website")]
    Website,
    #[strum(serialize = "address.street")]
    #[serde(rename = "address.street")]
    Street,
    #[strum(serialize = "address.city")]
    #[serde(rename = "address.city")]
    City,
    #[strum(serialize = "social.twitter")]
    #[serde(rename = "social.twitter")]
    Twitter,
    #[strum(serialize = "social.linkedin")]
    #[serde(rename = "social.linkedin")]
    Linkedin,
    #[strum(serialize = "social.github")]
    #[serde(rename = "social.github")]
    Github,
}

impl FormField {
    /// Key of this field in an error map.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Which half of the coordinate pair an input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateAxis {
    Longitude,
    Latitude,
}
