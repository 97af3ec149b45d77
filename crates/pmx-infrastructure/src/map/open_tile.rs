//! Open raster-tile map backend.

use pmx_core::error::Result;
use pmx_core::map::{MapAdapter, MapBackend, MapStyle};
use pmx_core::theme::Theme;

const LIGHT_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const DARK_TILES: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const CARTO_ATTRIBUTION: &str = concat!(
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors ",
    "&copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
);

/// Adapter for OpenStreetMap-style raster tiles. Needs no credentials.
#[derive(Debug, Clone, Default)]
pub struct OpenTileMapAdapter;

impl OpenTileMapAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl MapAdapter for OpenTileMapAdapter {
    fn backend(&self) -> MapBackend {
        MapBackend::OpenTile
    }

    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn style(&self, theme: Theme) -> MapStyle {
        let (url, attribution) = match theme {
            Theme::Light => (LIGHT_TILES, OSM_ATTRIBUTION),
            Theme::Dark => (DARK_TILES, CARTO_ATTRIBUTION),
        };
        MapStyle {
            url: url.to_string(),
            attribution: Some(attribution.to_string()),
        }
    }
}
