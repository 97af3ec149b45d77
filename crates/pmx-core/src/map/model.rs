//! Map scene models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::profile::{Coordinates, ProfileId};

/// Which map integration renders the scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MapBackend {
    /// Commercial vector-tile service; needs an access token
    VectorTile,
    /// Open raster tile service
    #[default]
    OpenTile,
}

/// Viewport centre and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub center: Coordinates,
    pub zoom: f64,
}

impl Camera {
    pub fn new(center: Coordinates, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

/// Base map style reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyle {
    /// Style URL (vector) or tile URL template (raster)
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

/// One pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub profile_id: ProfileId,
    pub coordinates: Coordinates,
    pub label: String,
    /// True for the selected profile's pin
    pub highlighted: bool,
}

/// Everything a shell needs to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScene {
    pub backend: MapBackend,
    pub style: MapStyle,
    pub camera: Camera,
    pub markers: Vec<Marker>,
}

impl MapScene {
    pub fn marker(&self, id: ProfileId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.profile_id == id)
    }

    pub fn highlighted(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.highlighted)
    }
}

/// Shown in place of the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapPlaceholder {
    /// The backend's access token is not configured
    MissingToken,
    /// The backend failed to start; the user may retry
    InitFailed { message: String },
    /// Nothing to plot
    NoProfiles,
}

impl MapPlaceholder {
    pub fn message(&self) -> &str {
        match self {
            MapPlaceholder::MissingToken => {
                "Error loading the map. Please check the map access token and try again"
            }
            MapPlaceholder::InitFailed { .. } => {
                "There was an error loading the map. Please try again later."
            }
            MapPlaceholder::NoProfiles => "No profiles to display on the map",
        }
    }

    /// Whether the placeholder offers a retry action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MapPlaceholder::InitFailed { .. })
    }
}

/// Output of one map render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum MapView {
    Placeholder(MapPlaceholder),
    Scene(MapScene),
}

impl MapView {
    pub fn scene(&self) -> Option<&MapScene> {
        match self {
            MapView::Scene(scene) => Some(scene),
            MapView::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&MapPlaceholder> {
        match self {
            MapView::Placeholder(placeholder) => Some(placeholder),
            MapView::Scene(_) => None,
        }
    }
}
