//! Vector-tile map backend.

use pmx_core::error::{PmxError, Result};
use pmx_core::map::{MapAdapter, MapBackend, MapStyle};
use pmx_core::theme::Theme;

const LIGHT_STYLE: &str = "mapbox://styles/mapbox/light-v10";
const DARK_STYLE: &str = "mapbox://styles/mapbox/dark-v10";

/// Adapter for the commercial vector-tile service.
///
/// A missing or blank access token is reported through
/// [`MapAdapter::has_credentials`] so the map shows a placeholder instead of
/// failing to load.
#[derive(Debug, Clone)]
pub struct VectorTileMapAdapter {
    access_token: Option<String>,
}

impl VectorTileMapAdapter {
    pub fn new(access_token: Option<String>) -> Self {
        let access_token = access_token.filter(|t| !t.trim().is_empty());
        Self { access_token }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl MapAdapter for VectorTileMapAdapter {
    fn backend(&self) -> MapBackend {
        MapBackend::VectorTile
    }

    fn has_credentials(&self) -> bool {
        self.access_token.is_some()
    }

    fn initialize(&self) -> Result<()> {
        if self.access_token.is_none() {
            return Err(PmxError::adapter_init("map access token is not configured"));
        }
        tracing::debug!("[VectorTileMapAdapter] Initialized");
        Ok(())
    }

    fn style(&self, theme: Theme) -> MapStyle {
        let url = if theme.is_dark() { DARK_STYLE } else { LIGHT_STYLE };
        MapStyle {
            url: url.to_string(),
            attribution: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_counts_as_missing() {
        let adapter = VectorTileMapAdapter::new(Some("   ".to_string()));
        assert!(!adapter.has_credentials());
        assert!(matches!(adapter.initialize(), Err(PmxError::AdapterInit(_))));
    }

    #[test]
    fn test_style_follows_theme() {
        let adapter = VectorTileMapAdapter::new(Some("pk.test".to_string()));
        assert!(adapter.initialize().is_ok());
        assert_eq!(adapter.style(Theme::Light).url, LIGHT_STYLE);
        assert_eq!(adapter.style(Theme::Dark).url, DARK_STYLE);
    }
}
