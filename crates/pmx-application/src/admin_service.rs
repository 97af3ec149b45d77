//! Admin dashboard use cases: create, edit and delete profiles.
//!
//! Mutations go through a simulated latency during which the service is
//! busy. A second trigger while busy is rejected with [`PmxError::Busy`].
//! The busy flag is released by a guard, so it clears on failure too.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

use pmx_core::error::{PmxError, Result};
use pmx_core::profile::{Profile, ProfileId, ProfileRepository};
use pmx_core::validation::ProfileForm;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this profile?";
pub const SAVE_FAILED: &str = "Failed to save profile. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete profile. Please try again.";

/// Asks the user a yes/no question.
pub trait ConfirmationPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmationPrompt for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing changed.
    Cancelled,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PmxError::Busy)?;
        Ok(Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct AdminService {
    repository: Arc<dyn ProfileRepository>,
    mutation_delay: Duration,
    busy: AtomicBool,
    last_error: Mutex<Option<String>>,
}

impl AdminService {
    pub fn new(repository: Arc<dyn ProfileRepository>, mutation_delay: Duration) -> Self {
        Self {
            repository,
            mutation_delay,
            busy: AtomicBool::new(false),
            last_error: Mutex::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Banner message of the last failed mutation.
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.lock().await.clone()
    }

    /// An empty "Add New Profile" form.
    pub fn open_create_form(&self) -> ProfileForm {
        ProfileForm::new()
    }

    /// An "Edit Profile" form for `id`.
    pub async fn open_edit_form(&self, id: ProfileId) -> Result<ProfileForm> {
        let profile = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| PmxError::not_found("Profile", id))?;
        Ok(ProfileForm::for_profile(&profile))
    }

    /// Validates `form` and creates or updates the profile it holds.
    ///
    /// Field errors are stored on the form and returned as
    /// `PmxError::Validation`; nothing is mutated and the service does not
    /// become busy.
    pub async fn save(&self, form: &mut ProfileForm) -> Result<Profile> {
        if self.is_busy() {
            return Err(PmxError::Busy);
        }
        let draft = form.submit()?;

        let _busy = BusyGuard::acquire(&self.busy)?;
        self.last_error.lock().await.take();
        self.simulate_latency().await;

        let result = match form.editing_id() {
            Some(id) => self.repository.update(id, draft).await,
            None => self.repository.create(draft).await,
        };

        match result {
            Ok(profile) => {
                tracing::info!("[AdminService] Saved profile {}", profile.id);
                Ok(profile)
            }
            Err(e) => {
                tracing::error!("[AdminService] Failed to save profile: {}", e);
                *self.last_error.lock().await = Some(SAVE_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Deletes `id` after the user confirms.
    pub async fn delete(
        &self,
        id: ProfileId,
        prompt: &dyn ConfirmationPrompt,
    ) -> Result<DeleteOutcome> {
        if self.is_busy() {
            return Err(PmxError::Busy);
        }
        if !prompt.confirm(DELETE_CONFIRMATION) {
            tracing::debug!("[AdminService] Delete of profile {} cancelled", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let _busy = BusyGuard::acquire(&self.busy)?;
        self.last_error.lock().await.take();
        self.simulate_latency().await;

        match self.repository.delete(id).await {
            Ok(()) => {
                tracing::info!("[AdminService] Deleted profile {}", id);
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                tracing::error!("[AdminService] Failed to delete profile {}: {}", id, e);
                *self.last_error.lock().await = Some(DELETE_FAILED.to_string());
                Err(e)
            }
        }
    }

    async fn simulate_latency(&self) {
        if !self.mutation_delay.is_zero() {
            tokio::time::sleep(self.mutation_delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmx_core::validation::FormField;
    use pmx_infrastructure::InMemoryProfileRepository;

    fn service(delay_ms: u64) -> (Arc<InMemoryProfileRepository>, Arc<AdminService>) {
        let repo = Arc::new(InMemoryProfileRepository::with_seed());
        let admin = Arc::new(AdminService::new(
            repo.clone(),
            Duration::from_millis(delay_ms),
        ));
        (repo, admin)
    }

    fn valid_form() -> ProfileForm {
        let mut form = ProfileForm::new();
        form.set_field(FormField::Name, "Ada Lovelace");
        form.set_field(FormField::Email, "ada@example.com");
        form.set_field(FormField::Avatar, "https://example.com/ada.png");
        form.set_field(FormField::Bio, "Analyst");
        form.set_field(FormField::Street, "12 St James's Square");
        form.set_field(FormField::City, "London");
        form
    }

    #[tokio::test]
    async fn test_invalid_form_does_not_mutate() {
        let (repo, admin) = service(0);
        let mut form = ProfileForm::new();
        form.set_field(FormField::Bio, "Only a bio");
        form.set_field(FormField::Street, "1 Main St");

        let err = admin.save(&mut form).await.unwrap_err();
        let errors = err.validation_errors().unwrap();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["address.city", "avatar", "email", "name"]);
        assert_eq!(form.error(FormField::Name), Some("Name is required"));
        assert_eq!(repo.list().await.unwrap().len(), 3);
        assert!(!admin.is_busy());
    }

    #[tokio::test]
    async fn test_create_then_edit() {
        let (repo, admin) = service(0);
        let created = admin.save(&mut valid_form()).await.unwrap();
        assert_eq!(created.id, ProfileId(4));

        let mut form = admin.open_edit_form(created.id).await.unwrap();
        form.set_field(FormField::City, "Cambridge");
        let updated = admin.save(&mut form).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(repo.get(created.id).await.unwrap().unwrap().address.city, "Cambridge");
    }

    #[tokio::test]
    async fn test_open_edit_form_for_missing_profile() {
        let (_, admin) = service(0);
        assert!(admin.open_edit_form(ProfileId(99)).await.unwrap_err().is_not_found());
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_rejects_duplicate_submission() {
        let (repo, admin) = service(500);

        let first = {
            let admin = admin.clone();
            tokio::spawn(async move { admin.save(&mut valid_form()).await })
        };
        for _ in 0..10 {
            if admin.is_busy() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(admin.is_busy());

        let second = admin.save(&mut valid_form()).await;
        assert!(second.unwrap_err().is_busy());

        let created = first.await.unwrap().unwrap();
        assert_eq!(created.id, ProfileId(4));
        assert!(!admin.is_busy());
        assert_eq!(repo.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_delete_cancelled_changes_nothing() {
        let (repo, admin) = service(0);
        let outcome = admin
            .delete(ProfileId(1), &|message: &str| {
                assert_eq!(message, DELETE_CONFIRMATION);
                false
            })
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_delete_sets_banner_and_clears_busy() {
        let (_, admin) = service(0);
        let err = admin.delete(ProfileId(42), &|_: &str| true).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(admin.last_error().await.as_deref(), Some(DELETE_FAILED));
        assert!(!admin.is_busy());

        // The next operation clears the banner
        admin.delete(ProfileId(1), &|_: &str| true).await.unwrap();
        assert_eq!(admin.last_error().await, None);
    }
}
