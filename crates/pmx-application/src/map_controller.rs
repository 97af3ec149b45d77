//! Map controller.
//!
//! Owns the single [`MapAdapter`] chosen at startup and turns the visible
//! profiles plus the selection into a [`MapView`]. Backend trouble becomes a
//! placeholder, never an error returned to the caller.

use std::sync::Arc;

use pmx_core::map::{Camera, MapAdapter, MapPlaceholder, MapScene, MapView, Marker};
use pmx_core::profile::{Profile, ProfileId};
use pmx_core::theme::Theme;

pub struct MapController {
    adapter: Arc<dyn MapAdapter>,
    /// Message of the last initialisation or load failure
    failure: Option<String>,
    camera: Camera,
    /// Selection the camera was last centred on
    focused: Option<ProfileId>,
}

impl MapController {
    /// Wraps `adapter` and initialises it once.
    pub fn new(adapter: Arc<dyn MapAdapter>) -> Self {
        let camera = adapter.default_camera();
        let mut controller = Self {
            adapter,
            failure: None,
            camera,
            focused: None,
        };
        controller.initialize();
        controller
    }

    fn initialize(&mut self) {
        if !self.adapter.has_credentials() {
            tracing::warn!(
                "[MapController] {} backend has no access token configured",
                self.adapter.backend()
            );
            return;
        }
        match self.adapter.initialize() {
            Ok(()) => self.failure = None,
            Err(e) => {
                tracing::warn!("[MapController] Map initialization failed: {}", e);
                self.failure = Some(e.to_string());
            }
        }
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Produces the map for `profiles`, highlighting `selected`.
    ///
    /// When the selection changed since the last render the camera moves to
    /// the selected profile at the adapter's focus zoom. The selected
    /// profile need not be among `profiles`.
    pub fn render(
        &mut self,
        profiles: &[Profile],
        selected: Option<&Profile>,
        theme: Theme,
    ) -> MapView {
        if !self.adapter.has_credentials() {
            return MapView::Placeholder(MapPlaceholder::MissingToken);
        }
        if profiles.is_empty() {
            return MapView::Placeholder(MapPlaceholder::NoProfiles);
        }
        if let Some(message) = &self.failure {
            return MapView::Placeholder(MapPlaceholder::InitFailed {
                message: message.clone(),
            });
        }

        let selected_id = selected.map(|p| p.id);
        if selected_id != self.focused {
            if let Some(profile) = selected {
                self.camera = Camera::new(profile.coordinates(), self.adapter.focus_zoom());
                tracing::debug!("[MapController] Centred on profile {}", profile.id);
            }
            self.focused = selected_id;
        }

        let markers = profiles
            .iter()
            .map(|profile| Marker {
                profile_id: profile.id,
                coordinates: profile.coordinates(),
                label: profile.name.clone(),
                highlighted: selected_id == Some(profile.id),
            })
            .collect();

        MapView::Scene(MapScene {
            backend: self.adapter.backend(),
            style: self.adapter.style(theme),
            camera: self.camera,
            markers,
        })
    }

    /// A pin was clicked: hands its id to `on_select`.
    pub fn activate_marker<F>(&self, id: ProfileId, on_select: F)
    where
        F: FnOnce(ProfileId),
    {
        on_select(id);
    }

    /// Records a failure reported by the backend while loading.
    pub fn report_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("[MapController] Map error: {}", message);
        self.failure = Some(message);
    }

    /// Clears a failure and initialises the backend again.
    ///
    /// Returns true when the map is usable afterwards.
    pub fn retry(&mut self) -> bool {
        self.failure = None;
        self.initialize();
        self.adapter.has_credentials() && self.failure.is_none()
    }

    /// Hides the failure placeholder without re-initialising.
    pub fn dismiss_error(&mut self) {
        self.failure = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmx_core::error::{PmxError, Result};
    use pmx_core::map::{DEFAULT_CENTER, DEFAULT_ZOOM, FOCUS_ZOOM, MapBackend, MapStyle};
    use pmx_core::profile::{Address, Coordinates};
    use pmx_infrastructure::{OpenTileMapAdapter, VectorTileMapAdapter};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails the first `failures` initialisations.
    struct FlakyAdapter {
        failures: usize,
        attempts: AtomicUsize,
    }

    impl MapAdapter for FlakyAdapter {
        fn backend(&self) -> MapBackend {
            MapBackend::OpenTile
        }

        fn initialize(&self) -> Result<()> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
            if attempt < self.failures {
                Err(PmxError::adapter_init("tiles unreachable"))
            } else {
                Ok(())
            }
        }

        fn style(&self, _theme: Theme) -> MapStyle {
            MapStyle {
                url: "https://tiles.test/{z}/{x}/{y}.png".to_string(),
                attribution: None,
            }
        }
    }

    fn profile(id: u32, name: &str, lon: f64, lat: f64) -> Profile {
        Profile {
            id: ProfileId(id),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            avatar: "https://example.com/a.png".to_string(),
            bio: String::new(),
            address: Address {
                street: "1 Main St".to_string(),
                city: "Somewhere".to_string(),
                coordinates: Coordinates::new(lon, lat),
            },
            interests: Vec::new(),
            phone: None,
            website: None,
            social: None,
        }
    }

    fn profiles() -> Vec<Profile> {
        vec![
            profile(1, "Sarah", -122.4194, 37.7749),
            profile(2, "Michael", -122.3321, 47.6062),
        ]
    }

    #[test]
    fn test_missing_token_shows_placeholder() {
        let mut controller = MapController::new(Arc::new(VectorTileMapAdapter::new(None)));
        let view = controller.render(&profiles(), None, Theme::Light);
        assert_eq!(view.placeholder(), Some(&MapPlaceholder::MissingToken));
        assert!(!controller.retry());
    }

    #[test]
    fn test_empty_profiles_shows_placeholder() {
        let mut controller = MapController::new(Arc::new(OpenTileMapAdapter::new()));
        let view = controller.render(&[], None, Theme::Light);
        assert_eq!(view.placeholder(), Some(&MapPlaceholder::NoProfiles));
    }

    #[test]
    fn test_one_marker_per_profile_with_selection_highlighted() {
        let mut controller = MapController::new(Arc::new(OpenTileMapAdapter::new()));
        let profiles = profiles();

        let view = controller.render(&profiles, None, Theme::Light);
        let scene = view.scene().unwrap();
        assert_eq!(scene.markers.len(), 2);
        assert!(scene.highlighted().is_none());
        assert_eq!(scene.camera, Camera::new(DEFAULT_CENTER, DEFAULT_ZOOM));

        let view = controller.render(&profiles, Some(&profiles[1]), Theme::Dark);
        let scene = view.scene().unwrap();
        assert_eq!(scene.highlighted().map(|m| m.profile_id), Some(ProfileId(2)));
        assert_eq!(
            scene.marker(ProfileId(1)).map(|m| m.coordinates),
            Some(Coordinates::new(-122.4194, 37.7749))
        );
        assert_eq!(
            scene.camera,
            Camera::new(Coordinates::new(-122.3321, 47.6062), FOCUS_ZOOM)
        );
    }

    #[test]
    fn test_camera_recentres_only_on_selection_change() {
        let mut controller = MapController::new(Arc::new(OpenTileMapAdapter::new()));
        let profiles = profiles();

        controller.render(&profiles, Some(&profiles[0]), Theme::Light);
        assert_eq!(controller.camera().center, profiles[0].coordinates());

        // Clearing the selection leaves the camera where it is
        controller.render(&profiles, None, Theme::Light);
        assert_eq!(controller.camera().center, profiles[0].coordinates());

        controller.render(&profiles, Some(&profiles[1]), Theme::Light);
        assert_eq!(controller.camera().center, profiles[1].coordinates());
    }

    #[test]
    fn test_activate_marker_passes_id() {
        let controller = MapController::new(Arc::new(OpenTileMapAdapter::new()));
        let mut chosen = None;
        controller.activate_marker(ProfileId(2), |id| chosen = Some(id));
        assert_eq!(chosen, Some(ProfileId(2)));
    }

    #[test]
    fn test_init_failure_retry_and_dismiss() {
        let adapter = Arc::new(FlakyAdapter {
            failures: 1,
            attempts: AtomicUsize::new(0),
        });
        let mut controller = MapController::new(adapter);
        let view = controller.render(&profiles(), None, Theme::Light);
        let placeholder = view.placeholder().unwrap();
        assert!(placeholder.is_retryable());

        assert!(controller.retry());
        assert!(controller.render(&profiles(), None, Theme::Light).scene().is_some());

        controller.report_failure("style failed to load");
        assert!(controller.has_failed());
        controller.dismiss_error();
        assert!(controller.render(&profiles(), None, Theme::Light).scene().is_some());
    }
}
