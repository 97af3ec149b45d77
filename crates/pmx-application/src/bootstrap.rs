//! Composition root.

use std::sync::Arc;

use anyhow::Result;
use pmx_core::config::AppConfig;
use pmx_core::profile::ProfileRepository;
use pmx_core::theme::{PreferenceStore, SystemAppearance};
use pmx_infrastructure::{
    ConfigService, FilePreferenceStore, InMemoryPreferenceStore, InMemoryProfileRepository,
    create_map_adapter,
};

use crate::admin_service::AdminService;
use crate::directory_app::DirectoryApp;
use crate::map_controller::MapController;
use crate::theme_service::ThemeService;

/// Host-provided ports.
pub struct AppPorts {
    pub repository: Arc<dyn ProfileRepository>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub system_appearance: SystemAppearance,
}

impl Default for AppPorts {
    /// Seeded in-memory profiles and in-memory preferences.
    fn default() -> Self {
        Self {
            repository: Arc::new(InMemoryProfileRepository::with_seed()),
            preferences: Arc::new(InMemoryPreferenceStore::new()),
            system_appearance: SystemAppearance::NoPreference,
        }
    }
}

/// Wires the application from configuration and host ports.
///
/// The map backend is picked from `config.map_backend` here and nowhere else.
pub async fn bootstrap(config: AppConfig, ports: AppPorts) -> Result<DirectoryApp> {
    let profile_count = ports.repository.list().await?.len();
    tracing::info!(
        "[Bootstrap] Starting with {} profiles, {} map backend",
        profile_count,
        config.map_backend
    );

    let map = MapController::new(create_map_adapter(&config));
    let theme = ThemeService::load(
        ports.preferences,
        config.theme_storage_key.clone(),
        ports.system_appearance,
    )
    .await;
    let admin = AdminService::new(ports.repository.clone(), config.mutation_delay());

    Ok(DirectoryApp::new(ports.repository, map, theme, admin))
}

/// Wires the application from on-disk configuration.
///
/// Reads `config.toml` through `config` (environment overrides included),
/// keeps the theme in `preferences` and starts from the sample profiles.
pub async fn bootstrap_from_files(
    config: &ConfigService,
    preferences: FilePreferenceStore,
    system_appearance: SystemAppearance,
) -> Result<DirectoryApp> {
    let ports = AppPorts {
        repository: Arc::new(InMemoryProfileRepository::with_seed()),
        preferences: Arc::new(preferences),
        system_appearance,
    };
    bootstrap(config.get_config(), ports).await
}

/// Wires the application from `~/.config/pmx`.
pub async fn bootstrap_default(system_appearance: SystemAppearance) -> Result<DirectoryApp> {
    let preferences = FilePreferenceStore::new()?;
    bootstrap_from_files(&ConfigService::new(), preferences, system_appearance).await
}
