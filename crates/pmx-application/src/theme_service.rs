//! Theme use case.
//!
//! Holds the one theme value for the process and persists every change
//! through the [`PreferenceStore`] port.

use std::sync::Arc;
use tokio::sync::RwLock;

use pmx_core::theme::{PreferenceStore, SystemAppearance, Theme, resolve_initial_theme};

pub struct ThemeService {
    store: Arc<dyn PreferenceStore>,
    storage_key: String,
    current: RwLock<Theme>,
}

impl ThemeService {
    /// Resolves the startup theme from the persisted preference, falling back
    /// to the system appearance.
    ///
    /// An unreadable preference is logged and treated as absent.
    pub async fn load(
        store: Arc<dyn PreferenceStore>,
        storage_key: impl Into<String>,
        system: SystemAppearance,
    ) -> Self {
        let storage_key = storage_key.into();
        let persisted = match store.get(&storage_key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("[ThemeService] Failed to read theme preference: {}", e);
                None
            }
        };
        let theme = resolve_initial_theme(persisted.as_deref(), system);
        tracing::debug!("[ThemeService] Initial theme: {}", theme);

        Self {
            store,
            storage_key,
            current: RwLock::new(theme),
        }
    }

    pub async fn current(&self) -> Theme {
        *self.current.read().await
    }

    /// Sets and persists the theme. A failed write keeps the new theme.
    pub async fn set(&self, theme: Theme) -> Theme {
        *self.current.write().await = theme;
        if let Err(e) = self.store.set(&self.storage_key, &theme.to_string()).await {
            tracing::warn!("[ThemeService] Failed to persist theme '{}': {}", theme, e);
        }
        theme
    }

    pub async fn toggle(&self) -> Theme {
        let next = self.current().await.toggled();
        self.set(next).await
    }
}
