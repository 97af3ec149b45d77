//! Map adapter trait.

use super::model::{Camera, MapBackend, MapStyle};
use crate::error::Result;
use crate::profile::Coordinates;
use crate::theme::Theme;

/// Geographic centre of the contiguous United States.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    longitude: -98.5795,
    latitude: 39.8283,
};

/// Zoom showing the whole continent.
pub const DEFAULT_ZOOM: f64 = 3.0;

/// Zoom used when focusing a selected profile.
pub const FOCUS_ZOOM: f64 = 5.0;

/// A map backend.
///
/// Implementations are chosen once at composition time; nothing switches
/// between them at runtime.
pub trait MapAdapter: Send + Sync {
    fn backend(&self) -> MapBackend;

    /// Whether the credentials the backend needs are configured.
    fn has_credentials(&self) -> bool {
        true
    }

    /// Prepares the backend. Fails with `PmxError::AdapterInit`.
    fn initialize(&self) -> Result<()>;

    /// Base map style for the given theme.
    fn style(&self, theme: Theme) -> MapStyle;

    fn default_camera(&self) -> Camera {
        Camera::new(DEFAULT_CENTER, DEFAULT_ZOOM)
    }

    fn focus_zoom(&self) -> f64 {
        FOCUS_ZOOM
    }
}
