//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `~/.config/pmx/config.toml` and applies
//! environment overrides for values that belong in the environment, such as
//! the map access token.

use pmx_core::config::AppConfig;
use pmx_core::error::{PmxError, Result};
use pmx_core::map::MapBackend;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::paths::PmxPaths;

/// Environment variable holding the vector-tile access token.
pub const MAPBOX_TOKEN_ENV: &str = "PMX_MAPBOX_ACCESS_TOKEN";
/// Token variable name used by the web build; accepted as a fallback.
pub const LEGACY_MAPBOX_TOKEN_ENV: &str = "VITE_MAPBOX_ACCESS_TOKEN";
/// Environment variable selecting the map backend.
pub const MAP_BACKEND_ENV: &str = "PMX_MAP_BACKEND";

/// Configuration service that loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` uses the platform default location.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading the default config file.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading a specific file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it if not cached.
    ///
    /// Load failures are logged and fall back to defaults plus environment
    /// overrides.
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let from_file = match self.config_path() {
            Ok(path) => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("[ConfigService] Using default configuration: {}", e);
                AppConfig::default()
            }),
            Err(e) => {
                tracing::warn!("[ConfigService] {}", e);
                AppConfig::default()
            }
        };
        let loaded = apply_env_overrides(from_file, |key| std::env::var(key).ok());

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::debug!("[ConfigService] No config file at {:?}", path);
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| PmxError::io(format!("Failed to read {}: {}", path.display(), e)))?;
        Ok(toml::from_str(&content)?)
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => PmxPaths::config_file().map_err(|e| PmxError::config(e.to_string())),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies environment overrides using `lookup` to read variables.
///
/// A blank token counts as absent. An unknown backend name is ignored.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let token = lookup(MAPBOX_TOKEN_ENV)
        .or_else(|| lookup(LEGACY_MAPBOX_TOKEN_ENV))
        .filter(|t| !t.trim().is_empty());
    if token.is_some() {
        config.mapbox_access_token = token;
    }

    if let Some(backend) = lookup(MAP_BACKEND_ENV) {
        match backend.trim().parse::<MapBackend>() {
            Ok(backend) => config.map_backend = backend,
            Err(_) => tracing::warn!("[ConfigService] Ignoring unknown map backend '{}'", backend),
        }
    }

    config
}
