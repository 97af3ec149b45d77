//! Profile repository trait.
//!
//! Defines the interface the application layer uses to read and mutate
//! profiles, decoupling use cases from where the collection lives.

use super::model::{Profile, ProfileDraft, ProfileId};
use crate::error::Result;

/// An abstract repository over the ordered profile collection.
///
/// Implementations must keep insertion order, assign ids as
/// `max(existing) + 1` (or 1 when empty) and fail with
/// `PmxError::NotFound` when updating or deleting an absent id.
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Snapshot of all profiles in insertion order.
    async fn list(&self) -> Result<Vec<Profile>>;

    /// Finds a profile by id.
    async fn get(&self, id: ProfileId) -> Result<Option<Profile>>;

    /// Appends a new profile and returns it with its assigned id.
    async fn create(&self, draft: ProfileDraft) -> Result<Profile>;

    /// Replaces the profile with `id` in place.
    async fn update(&self, id: ProfileId, draft: ProfileDraft) -> Result<Profile>;

    /// Removes the profile with `id`.
    ///
    /// Clearing a selection that points at `id` is the caller's job.
    async fn delete(&self, id: ProfileId) -> Result<()>;
}
