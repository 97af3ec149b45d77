//! Ordered in-memory profile collection.

use super::model::{Profile, ProfileDraft, ProfileId};
use crate::error::{PmxError, Result};

/// Answers whether a profile id currently exists.
///
/// The navigation state machine uses this to validate deep links and
/// selections without depending on a concrete collection type.
pub trait ProfileLookup {
    fn contains_profile(&self, id: ProfileId) -> bool;
}

impl ProfileLookup for [Profile] {
    fn contains_profile(&self, id: ProfileId) -> bool {
        self.iter().any(|p| p.id == id)
    }
}

impl ProfileLookup for Vec<Profile> {
    fn contains_profile(&self, id: ProfileId) -> bool {
        self.as_slice().contains_profile(id)
    }
}

/// The profile collection in insertion order.
///
/// Ids are assigned as `max(existing ids) + 1`, so deleting the profile with
/// the highest id and creating another hands the same id out again.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from seed data.
    ///
    /// Seed records are not validated. Should two records share an id, only
    /// the first is kept so ids stay unique.
    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let mut store = Self::new();
        for profile in profiles {
            if !store.contains(profile.id) {
                store.profiles.push(profile);
            }
        }
        store
    }

    /// Snapshot of all profiles in insertion order.
    pub fn list(&self) -> Vec<Profile> {
        self.profiles.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProfileId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The id the next `create` will assign.
    ///
    /// Fails with `PmxError::Internal` when the largest id is `u32::MAX`.
    pub fn next_id(&self) -> Result<ProfileId> {
        match self.profiles.iter().map(|p| p.id).max() {
            None => Ok(ProfileId::FIRST),
            Some(max) => max
                .next()
                .ok_or_else(|| PmxError::internal(format!("no profile id after {}", max))),
        }
    }

    /// Appends a new profile built from `draft`.
    ///
    /// Validating the draft is the form's responsibility.
    pub fn create(&mut self, draft: ProfileDraft) -> Result<Profile> {
        let profile = Profile::from_draft(self.next_id()?, draft);
        self.profiles.push(profile.clone());
        Ok(profile)
    }

    /// Replaces the record with `id`, keeping its position and id.
    pub fn update(&mut self, id: ProfileId, draft: ProfileDraft) -> Result<Profile> {
        let slot = self
            .profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PmxError::not_found("profile", id))?;
        *slot = Profile::from_draft(id, draft);
        Ok(slot.clone())
    }

    /// Removes the record with `id`.
    pub fn delete(&mut self, id: ProfileId) -> Result<()> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PmxError::not_found("profile", id))?;
        self.profiles.remove(index);
        Ok(())
    }
}

impl ProfileLookup for ProfileStore {
    fn contains_profile(&self, id: ProfileId) -> bool {
        self.contains(id)
    }
}
