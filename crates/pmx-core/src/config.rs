//! Application configuration model.
//!
//! Loaded from `config.toml` by `pmx-infrastructure::ConfigService`; every
//! field has a default so a missing or partial file is fine.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::map::MapBackend;
use crate::theme::THEME_STORAGE_KEY;

fn default_mutation_delay_ms() -> u64 {
    500
}

fn default_theme_storage_key() -> String {
    THEME_STORAGE_KEY.to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Map integration used by this build
    #[serde(default)]
    pub map_backend: MapBackend,

    /// Access token for the vector-tile backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapbox_access_token: Option<String>,

    /// Simulated latency before admin mutations complete (0 disables it)
    #[serde(default = "default_mutation_delay_ms")]
    pub mutation_delay_ms: u64,

    #[serde(default = "default_theme_storage_key")]
    pub theme_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_backend: MapBackend::default(),
            mapbox_access_token: None,
            mutation_delay_ms: default_mutation_delay_ms(),
            theme_storage_key: default_theme_storage_key(),
        }
    }
}

impl AppConfig {
    pub fn mutation_delay(&self) -> Duration {
        Duration::from_millis(self.mutation_delay_ms)
    }
}
