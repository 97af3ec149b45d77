//! Profile form editing session.

use serde::{Deserialize, Serialize};

use super::field::{CoordinateAxis, FormField};
use super::rules::{ValidationErrors, validate};
use crate::profile::{Address, Coordinates, Profile, ProfileDraft, ProfileId, SocialLinks};

/// Raw form contents, every text input as typed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormData {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    pub phone: String,
    pub website: String,
    pub street: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub interests: Vec<String>,
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
}

impl ProfileFormData {
    /// Pre-fills the form from an existing profile.
    pub fn from_profile(profile: &Profile) -> Self {
        let social = profile.social.clone().unwrap_or_default();
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            avatar: profile.avatar.clone(),
            bio: profile.bio.clone(),
            phone: profile.phone.clone().unwrap_or_default(),
            website: profile.website.clone().unwrap_or_default(),
            street: profile.address.street.clone(),
            city: profile.address.city.clone(),
            coordinates: profile.address.coordinates,
            interests: profile.interests.clone(),
            twitter: social.twitter.unwrap_or_default(),
            linkedin: social.linkedin.unwrap_or_default(),
            github: social.github.unwrap_or_default(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Avatar => &self.avatar,
            FormField::Bio => &self.bio,
            FormField::Phone => &self.phone,
            FormField::Website => &self.website,
            FormField::Street => &self.street,
            FormField::City => &self.city,
            FormField::Twitter => &self.twitter,
            FormField::Linkedin => &self.linkedin,
            FormField::Github => &self.github,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Avatar => &mut self.avatar,
            FormField::Bio => &mut self.bio,
            FormField::Phone => &mut self.phone,
            FormField::Website => &mut self.website,
            FormField::Street => &mut self.street,
            FormField::City => &mut self.city,
            FormField::Twitter => &mut self.twitter,
            FormField::Linkedin => &mut self.linkedin,
            FormField::Github => &mut self.github,
        }
    }

    /// Converts to a draft. Blank optional inputs become `None`.
    pub fn to_draft(&self) -> ProfileDraft {
        let social = SocialLinks {
            twitter: non_blank(&self.twitter),
            linkedin: non_blank(&self.linkedin),
            github: non_blank(&self.github),
        };
        ProfileDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
            bio: self.bio.clone(),
            address: Address {
                street: self.street.clone(),
                city: self.city.clone(),
                coordinates: self.coordinates,
            },
            interests: self.interests.clone(),
            phone: non_blank(&self.phone),
            website: non_blank(&self.website),
            social: (!social.is_empty()).then_some(social),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

/// One create or edit session of the admin form.
///
/// Errors are field-scoped: editing a field clears that field's error only.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    data: ProfileFormData,
    errors: ValidationErrors,
    editing: Option<ProfileId>,
}

impl ProfileForm {
    /// An empty "Add New Profile" form; coordinates start at (0, 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// An "Edit Profile" form pre-filled from `profile`.
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            data: ProfileFormData::from_profile(profile),
            errors: ValidationErrors::new(),
            editing: Some(profile.id),
        }
    }

    /// Id of the profile being edited, `None` when creating.
    pub fn editing_id(&self) -> Option<ProfileId> {
        self.editing
    }

    pub fn data(&self) -> &ProfileFormData {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Sets a text field and clears its error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.errors.clear(field);
        *self.data.field_mut(field) = value.into();
    }

    /// Sets interests from comma-separated input.
    pub fn set_interests_csv(&mut self, input: &str) {
        self.data.interests = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// Comma-separated form of the interests, as shown in the input.
    pub fn interests_csv(&self) -> String {
        self.data.interests.join(", ")
    }

    /// Sets one coordinate from text input.
    ///
    /// Returns false and keeps the previous value when the input is not a
    /// finite number.
    pub fn set_coordinate(&mut self, axis: CoordinateAxis, input: &str) -> bool {
        let Ok(value) = input.trim().parse::<f64>() else {
            return false;
        };
        if !value.is_finite() {
            return false;
        }
        match axis {
            CoordinateAxis::Longitude => self.data.coordinates.longitude = value,
            CoordinateAxis::Latitude => self.data.coordinates.latitude = value,
        }
        true
    }

    /// Runs every rule and stores the resulting errors.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.data);
        self.errors.is_empty()
    }

    /// Validates and, when clean, returns the draft to hand to the store.
    pub fn submit(&mut self) -> Result<ProfileDraft, ValidationErrors> {
        if self.validate() {
            Ok(self.data.to_draft())
        } else {
            Err(self.errors.clone())
        }
    }
}
