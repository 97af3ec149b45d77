//! In-memory profile repository.
//!
//! The profile collection lives for the lifetime of the process; nothing is
//! persisted. Starts from the built-in sample profiles unless given others.

use async_trait::async_trait;
use tokio::sync::Mutex;

use pmx_core::error::Result;
use pmx_core::profile::{Profile, ProfileDraft, ProfileId, ProfileRepository, ProfileStore};

use crate::seed::seed_profiles;

/// [`ProfileRepository`] backed by a [`ProfileStore`] behind an async mutex.
pub struct InMemoryProfileRepository {
    store: Mutex<ProfileStore>,
}

impl InMemoryProfileRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            store: Mutex::new(ProfileStore::new()),
        }
    }

    /// Creates a repository holding the sample profiles.
    pub fn with_seed() -> Self {
        Self::with_profiles(seed_profiles())
    }

    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            store: Mutex::new(ProfileStore::with_profiles(profiles)),
        }
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn list(&self) -> Result<Vec<Profile>> {
        Ok(self.store.lock().await.list())
    }

    async fn get(&self, id: ProfileId) -> Result<Option<Profile>> {
        Ok(self.store.lock().await.get(id).cloned())
    }

    async fn create(&self, draft: ProfileDraft) -> Result<Profile> {
        let profile = self.store.lock().await.create(draft)?;
        tracing::info!(
            "[InMemoryProfileRepository] Created profile {} ({})",
            profile.id,
            profile.name
        );
        Ok(profile)
    }

    async fn update(&self, id: ProfileId, draft: ProfileDraft) -> Result<Profile> {
        let profile = self.store.lock().await.update(id, draft)?;
        tracing::info!("[InMemoryProfileRepository] Updated profile {}", id);
        Ok(profile)
    }

    async fn delete(&self, id: ProfileId) -> Result<()> {
        self.store.lock().await.delete(id)?;
        tracing::info!("[InMemoryProfileRepository] Deleted profile {}", id);
        Ok(())
    }
}
