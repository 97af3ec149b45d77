//! The facade a UI shell drives.
//!
//! One [`DirectoryApp`] per UI. It owns the explore view's transient state
//! (filters and the navigation state machine) and routes every user action
//! through the matching use case.

use std::sync::Arc;
use tokio::sync::Mutex;

use pmx_core::error::Result;
use pmx_core::map::MapView;
use pmx_core::navigation::{NavigationEvent, NavigationState, Route, Transition};
use pmx_core::profile::{Profile, ProfileId, ProfileRepository};
use pmx_core::search::{SearchFilters, filter_profiles};
use pmx_core::theme::Theme;
use pmx_core::validation::ProfileForm;

use crate::admin_service::{AdminService, ConfirmationPrompt, DeleteOutcome};
use crate::map_controller::MapController;
use crate::theme_service::ThemeService;

pub const PROFILE_NOT_FOUND: &str =
    "The profile you're looking for doesn't exist or has been removed.";

/// Content of the profile detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Found(Box<Profile>),
    NotFound,
}

impl DetailView {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            DetailView::Found(profile) => Some(profile.as_ref()),
            DetailView::NotFound => None,
        }
    }
}

#[derive(Default)]
struct ExplorerState {
    navigation: NavigationState,
    filters: SearchFilters,
}

pub struct DirectoryApp {
    repository: Arc<dyn ProfileRepository>,
    explorer: Mutex<ExplorerState>,
    map: Mutex<MapController>,
    theme: ThemeService,
    admin: AdminService,
}

impl DirectoryApp {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        map: MapController,
        theme: ThemeService,
        admin: AdminService,
    ) -> Self {
        Self {
            repository,
            explorer: Mutex::new(ExplorerState::default()),
            map: Mutex::new(map),
            theme,
            admin,
        }
    }

    /// Current navigation state, with a selection whose profile has since
    /// left the store dropped.
    pub async fn state(&self) -> Result<NavigationState> {
        let profiles = self.repository.list().await?;
        let mut explorer = self.explorer.lock().await;
        explorer.navigation = explorer.navigation.reconcile(&profiles);
        Ok(explorer.navigation)
    }

    async fn dispatch(&self, event: NavigationEvent) -> Result<Transition> {
        let profiles = self.repository.list().await?;
        let mut explorer = self.explorer.lock().await;
        let current = explorer.navigation.reconcile(&profiles);
        let transition = current.apply(event, &profiles);
        tracing::debug!(
            "[DirectoryApp] {:?}: {:?} -> {:?}",
            event,
            explorer.navigation,
            transition.state
        );
        explorer.navigation = transition.state;
        Ok(transition)
    }

    // ============================================================================
    // Navigation and selection
    // ============================================================================

    pub async fn navigate(&self, route: Route) -> Result<Transition> {
        self.dispatch(NavigationEvent::Navigate(route)).await
    }

    /// Navigates to a location string such as `/explore?profileId=2`.
    pub async fn open_location(&self, location: &str) -> Result<Transition> {
        self.navigate(Route::parse(location)).await
    }

    pub async fn select_profile(&self, id: ProfileId) -> Result<NavigationState> {
        Ok(self.dispatch(NavigationEvent::SelectProfile(id)).await?.state)
    }

    /// Shows `id` on the map; the returned transition carries the location
    /// to push.
    pub async fn view_on_map(&self, id: ProfileId) -> Result<Transition> {
        self.dispatch(NavigationEvent::ViewOnMap(id)).await
    }

    pub async fn selected_profile(&self) -> Result<Option<Profile>> {
        let Some(id) = self.state().await?.selected_id() else {
            return Ok(None);
        };
        self.repository.get(id).await
    }

    // ============================================================================
    // Search
    // ============================================================================

    pub async fn set_filters(&self, filters: SearchFilters) {
        self.explorer.lock().await.filters = filters;
    }

    pub async fn filters(&self) -> SearchFilters {
        self.explorer.lock().await.filters.clone()
    }

    /// Profiles matching the current filters, in store order.
    pub async fn visible_profiles(&self) -> Result<Vec<Profile>> {
        let profiles = self.repository.list().await?;
        let filters = self.filters().await;
        Ok(filter_profiles(&profiles, &filters))
    }

    /// Every profile, unfiltered (admin table).
    pub async fn all_profiles(&self) -> Result<Vec<Profile>> {
        self.repository.list().await
    }

    // ============================================================================
    // Map
    // ============================================================================

    pub async fn map_view(&self) -> Result<MapView> {
        let visible = self.visible_profiles().await?;
        let selected = self.selected_profile().await?;
        let theme = self.theme.current().await;
        Ok(self
            .map
            .lock()
            .await
            .render(&visible, selected.as_ref(), theme))
    }

    /// A map pin was clicked.
    pub async fn activate_marker(&self, id: ProfileId) -> Result<NavigationState> {
        let mut chosen = None;
        self.map
            .lock()
            .await
            .activate_marker(id, |id| chosen = Some(id));
        match chosen {
            Some(id) => self.select_profile(id).await,
            None => self.state().await,
        }
    }

    pub async fn report_map_failure(&self, message: impl Into<String>) {
        self.map.lock().await.report_failure(message);
    }

    pub async fn retry_map(&self) -> bool {
        self.map.lock().await.retry()
    }

    pub async fn dismiss_map_error(&self) {
        self.map.lock().await.dismiss_error();
    }

    // ============================================================================
    // Detail page
    // ============================================================================

    /// Resolves the detail page; `None` is an unparseable id in the URL.
    pub async fn profile_detail(&self, id: Option<ProfileId>) -> Result<DetailView> {
        let Some(id) = id else {
            return Ok(DetailView::NotFound);
        };
        Ok(match self.repository.get(id).await? {
            Some(profile) => DetailView::Found(Box::new(profile)),
            None => DetailView::NotFound,
        })
    }

    // ============================================================================
    // Admin
    // ============================================================================

    pub fn is_busy(&self) -> bool {
        self.admin.is_busy()
    }

    /// Banner message of the last failed admin mutation.
    pub async fn admin_error(&self) -> Option<String> {
        self.admin.last_error().await
    }

    pub fn open_create_form(&self) -> ProfileForm {
        self.admin.open_create_form()
    }

    pub async fn open_edit_form(&self, id: ProfileId) -> Result<ProfileForm> {
        self.admin.open_edit_form(id).await
    }

    pub async fn save_profile(&self, form: &mut ProfileForm) -> Result<Profile> {
        self.admin.save(form).await
    }

    /// Deletes after confirmation and drops a selection pointing at `id`.
    pub async fn delete_profile(
        &self,
        id: ProfileId,
        prompt: &dyn ConfirmationPrompt,
    ) -> Result<DeleteOutcome> {
        let outcome = self.admin.delete(id, prompt).await?;
        if outcome == DeleteOutcome::Deleted {
            self.dispatch(NavigationEvent::ProfileDeleted(id)).await?;
        }
        Ok(outcome)
    }

    // ============================================================================
    // Theme
    // ============================================================================

    pub async fn theme(&self) -> Theme {
        self.theme.current().await
    }

    pub async fn toggle_theme(&self) -> Theme {
        self.theme.toggle().await
    }
}
